//! XML rendering of scheme documents.
//!
//! Produces the editor color scheme format:
//!
//! ```xml
//! <scheme name="One Dark" parent_scheme="Darcula" version="142">
//!   <colors>
//!     <option name="CARET_COLOR" value="61afef"/>
//!   </colors>
//!   <attributes>
//!     <option name="DEFAULT_CLASS_NAME" baseAttributes="DEFAULT_IDENTIFIER"/>
//!     <option name="DEFAULT_KEYWORD">
//!       <value>
//!         <option name="FOREGROUND" value="c678dd"/>
//!       </value>
//!     </option>
//!   </attributes>
//! </scheme>
//! ```
//!
//! There is no XML declaration. Output depends only on the document, so
//! rendering is byte-for-byte repeatable.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::document::{AttributeBlock, SchemeDocument, SchemeOption};
use crate::error::SchemeError;

type XmlWriter = Writer<Vec<u8>>;

/// Renders a scheme document as indented XML, ending with a newline.
pub fn render_xml(doc: &SchemeDocument) -> Result<String, SchemeError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let scheme = BytesStart::new("scheme").with_attributes([
        ("name", doc.name.as_str()),
        ("parent_scheme", doc.parent_scheme.as_str()),
        ("version", doc.version),
    ]);
    writer.write_event(Event::Start(scheme))?;

    writer.write_event(Event::Start(BytesStart::new("colors")))?;
    for color in &doc.colors {
        write_option(&mut writer, color)?;
    }
    writer.write_event(Event::End(BytesEnd::new("colors")))?;

    writer.write_event(Event::Start(BytesStart::new("attributes")))?;
    for inherited in &doc.inherited {
        let option = BytesStart::new("option").with_attributes([
            ("name", inherited.name.as_str()),
            ("baseAttributes", inherited.base.as_str()),
        ]);
        writer.write_event(Event::Empty(option))?;
    }
    for block in &doc.attributes {
        write_attribute(&mut writer, block)?;
    }
    writer.write_event(Event::End(BytesEnd::new("attributes")))?;

    writer.write_event(Event::End(BytesEnd::new("scheme")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

fn write_option(writer: &mut XmlWriter, option: &SchemeOption) -> Result<(), SchemeError> {
    let element = BytesStart::new("option")
        .with_attributes([("name", option.name.as_str()), ("value", option.value.as_str())]);
    writer.write_event(Event::Empty(element))?;
    Ok(())
}

fn write_attribute(writer: &mut XmlWriter, block: &AttributeBlock) -> Result<(), SchemeError> {
    let option = BytesStart::new("option").with_attributes([("name", block.name.as_str())]);
    writer.write_event(Event::Start(option))?;

    if block.options.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new("value")))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new("value")))?;
        for option in &block.options {
            write_option(writer, option)?;
        }
        writer.write_event(Event::End(BytesEnd::new("value")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("option")))?;
    Ok(())
}
