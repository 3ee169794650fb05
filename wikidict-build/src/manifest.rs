//! Package manifest (`dictionary.opf`).

use serde::Serialize;
use uuid::Uuid;
use wikidict_render::escape_text;

use crate::writer::content_file_name;

pub const MANIFEST_FILE: &str = "dictionary.opf";
pub const COVER_FILE: &str = "cover.html";
pub const COPYRIGHT_FILE: &str = "copyright.html";

const LANGUAGE: &str = "en-us";

/// Package-level description of a finished build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    pub title: String,
    pub author: String,
    /// Unique package identifier.
    pub identifier: Uuid,
    /// Number of content documents (`content_1.html` ..= `content_{n}.html`).
    pub documents: usize,
}

impl PackageDescriptor {
    /// Creates a descriptor with a fresh random identifier.
    pub fn new(title: impl Into<String>, author: impl Into<String>, documents: usize) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            identifier: Uuid::new_v4(),
            documents,
        }
    }

    /// Replaces the identifier, for reproducible builds.
    #[must_use]
    pub fn with_identifier(mut self, identifier: Uuid) -> Self {
        self.identifier = identifier;
        self
    }

    /// Every item in reading order: cover, copyright, then the content documents.
    pub fn items(&self) -> Vec<(String, String)> {
        let mut items = vec![
            ("cover".to_string(), COVER_FILE.to_string()),
            ("copyright".to_string(), COPYRIGHT_FILE.to_string()),
        ];
        items.extend((1..=self.documents).map(|n| (format!("content_{n}"), content_file_name(n))));
        items
    }

    /// Renders the OPF 2.0 package document.
    pub fn to_opf(&self) -> String {
        let items = self.items();
        let manifest: String = items
            .iter()
            .map(|(id, href)| {
                format!(
                    "    <item id=\"{id}\" href=\"{href}\" media-type=\"application/xhtml+xml\"/>\n"
                )
            })
            .collect();
        let spine: String = items
            .iter()
            .map(|(id, _)| format!("    <itemref idref=\"{id}\"/>\n"))
            .collect();
        let guide = if self.documents > 0 {
            format!(
                "    <reference type=\"index\" title=\"IndexName\" href=\"{}\"/>\n",
                content_file_name(1)
            )
        } else {
            String::new()
        };

        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<package version="2.0" xmlns="http://www.idpf.org/2007/opf" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
    <dc:title>{title}</dc:title>
    <dc:creator opf:role="aut">{author}</dc:creator>
    <dc:language>{LANGUAGE}</dc:language>
    <dc:identifier id="BookId" opf:scheme="UUID">urn:uuid:{identifier}</dc:identifier>
    <x-metadata>
      <DictionaryInLanguage>{LANGUAGE}</DictionaryInLanguage>
      <DictionaryOutLanguage>{LANGUAGE}</DictionaryOutLanguage>
      <DefaultLookupIndex>default</DefaultLookupIndex>
    </x-metadata>
  </metadata>
  <manifest>
{manifest}  </manifest>
  <spine>
{spine}  </spine>
  <guide>
{guide}  </guide>
</package>
"#,
            title = escape_text(&self.title),
            author = escape_text(&self.author),
            identifier = self.identifier,
        )
    }
}
