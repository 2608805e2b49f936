use crate::error::Result;
use quick_xml::Reader;
use quick_xml::events::Event;

/// Fixed name of the metadata entry inside a foreign comic archive.
pub const COMIC_INFO_NAME: &str = "ComicInfo.xml";

/// The fields this pipeline consumes from a ComicInfo.xml document.
#[derive(Debug, Default, Clone)]
pub struct ComicInfo {
    pub title: String,
    pub series: String,
    pub manga: String,
}

impl ComicInfo {
    /// Any non-empty `Manga` value means manga.
    pub fn is_manga(&self) -> bool {
        !self.manga.trim().is_empty()
    }
}

pub fn parse_comic_info(xml: &str) -> Result<ComicInfo> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut info = ComicInfo::default();
    let mut current_element = String::new();
    let mut current_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                current_element = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                current_text.clear();
            }
            Ok(Event::Text(ref e)) => {
                current_text.push_str(&e.unescape().unwrap_or_default());
            }
            Ok(Event::End(_)) => {
                let text = current_text.trim().to_string();
                match current_element.as_str() {
                    "Title" => info.title = text,
                    "Series" => info.series = text,
                    "Manga" => info.manga = text,
                    _ => {}
                }
                current_text.clear();
                current_element.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(info)
}
