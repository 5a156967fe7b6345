//! RSS 2.0 parser.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::FeedError;
use crate::score::position_score;
use crate::text::strip_html;
use crate::types::RawSignal;

use super::{build_signal, MAX_SIGNALS_PER_FEED};

/// Parse an RSS XML feed into [`RawSignal`]s.
///
/// Extracts `<item>` elements, pulling `<title>`, `<link>`, and `<description>`.
/// HTML in descriptions is stripped. RSS carries no engagement counts, so the
/// score comes from the item's position in the feed.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] if the XML is malformed.
pub(crate) fn parse_rss_feed(xml: &str, feed_id: &str) -> Result<Vec<RawSignal>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut signals = Vec::new();
    let mut in_item = false;
    // Item field whose text is being collected; survives nested inline markup.
    let mut field: Option<ItemField> = None;
    let mut title = String::new();
    let mut link = String::new();
    let mut description = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                let name = std::str::from_utf8(name.as_ref()).unwrap_or("");
                if name == "item" {
                    in_item = true;
                    field = None;
                    title.clear();
                    link.clear();
                    description.clear();
                } else if in_item && field.is_none() {
                    field = ItemField::from_tag(name);
                }
            }
            Ok(Event::End(e)) => {
                let name = e.name();
                let name = std::str::from_utf8(name.as_ref()).unwrap_or("");
                if field.is_some() && field == ItemField::from_tag(name) {
                    field = None;
                }
                if name == "item" && in_item {
                    in_item = false;
                    field = None;
                    if !link.is_empty() {
                        let score = position_score(signals.len());
                        if let Some(signal) = build_signal(
                            feed_id,
                            &title,
                            &strip_html(&description),
                            link.clone(),
                            score,
                            &[],
                        ) {
                            signals.push(signal);
                        }
                        if signals.len() >= MAX_SIGNALS_PER_FEED {
                            break;
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(field) = field {
                    let text = e.unescape().unwrap_or_default();
                    append_text(field.target(&mut title, &mut link, &mut description), &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(field) = field {
                    let text = String::from_utf8_lossy(e.as_ref());
                    append_text(field.target(&mut title, &mut link, &mut description), &text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Xml(e)),
            _ => {}
        }
    }

    Ok(signals)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemField {
    Title,
    Link,
    Description,
}

impl ItemField {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "title" => Some(Self::Title),
            "link" => Some(Self::Link),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    fn target<'a>(
        self,
        title: &'a mut String,
        link: &'a mut String,
        description: &'a mut String,
    ) -> &'a mut String {
        match self {
            Self::Title => title,
            Self::Link => link,
            Self::Description => description,
        }
    }
}

fn append_text(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}
