//! Narrow HTML scraping port.
//!
//! Wraps the `scraper` crate behind the two operations the pipeline needs,
//! so parsing logic can run against fixture documents and the scraping
//! library stays swappable.

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML document from text.
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Find the first element matching a CSS selector.
    pub fn find_first(&self, selector: &str) -> Result<Option<ElementRef<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).next())
    }

    /// Find all elements matching a CSS selector, in document order.
    pub fn find_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        let sel = compile(selector)?;
        Ok(self.html.select(&sel).collect())
    }
}

/// Find the first descendant of an element matching a CSS selector.
pub fn find_first_in<'a>(
    element: &ElementRef<'a>,
    selector: &str,
) -> Result<Option<ElementRef<'a>>> {
    let sel = compile(selector)?;
    Ok(element.select(&sel).next())
}

/// Find all descendants of an element matching a CSS selector.
pub fn find_all_in<'a>(element: &ElementRef<'a>, selector: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = compile(selector)?;
    Ok(element.select(&sel).collect())
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector(format!("{selector}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_and_all() {
        let doc = Document::parse("<ul><li class='a'>one</li><li class='a'>two</li></ul>");
        let first = doc.find_first("li.a").unwrap().unwrap();
        assert_eq!(first.text().collect::<String>(), "one");
        assert_eq!(doc.find_all("li.a").unwrap().len(), 2);
        assert!(doc.find_first("li.b").unwrap().is_none());
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse("<p></p>");
        assert!(doc.find_first("p[").is_err());
    }
}
