use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn first_child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }
}

pub trait XmlParser {
    fn parse(&self, text: &str) -> Result<XmlElement, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoxmlParser;

impl XmlParser for RoxmlParser {
    fn parse(&self, text: &str) -> Result<XmlElement, String> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)
            .map_err(|e| e.to_string())?;
        Ok(convert(doc.root_element()))
    }
}

fn convert(node: roxmltree::Node<'_, '_>) -> XmlElement {
    XmlElement {
        name: node.tag_name().name().to_string(),
        attributes: node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect(),
        children: node
            .children()
            .filter(|child| child.is_element())
            .map(convert)
            .collect(),
    }
}

#[cfg(test)]
impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }
}
