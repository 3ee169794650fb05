//! Fixed markup: content document frame, cover and copyright pages.

use wikidict_render::escape_text;

/// Opening markup of every content document, up to the entry frameset.
pub const DOCUMENT_HEADER: &str = r#"<html xmlns:math="http://exslt.org/math" xmlns:svg="http://www.w3.org/2000/svg"
    xmlns:tl="https://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf"
    xmlns:saxon="http://saxon.sf.net/" xmlns:xs="http://www.w3.org/2001/XMLSchema"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xmlns:cx="https://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf"
    xmlns:dc="http://purl.org/dc/elements/1.1/"
    xmlns:mbp="https://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf"
    xmlns:mmc="https://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf"
    xmlns:idx="https://kindlegen.s3.amazonaws.com/AmazonKindlePublishingGuidelines.pdf">
  <head>
    <meta http-equiv="Content-Type" content="text/html; charset=utf-8">
    <!-- entry layout -->
    <style>
      dt { font-weight: bold; }
      dd { padding: 0; margin: 0; }
      phonetic { font-weight: normal; color: gray; }
      ol, ul { padding: 0; padding-left: 20px; }
    </style>
  </head>
  <body>
    <mbp:frameset>
"#;

/// Closing markup of every content document.
pub const DOCUMENT_FOOTER: &str = r#"
    </mbp:frameset>
  </body>
</html>
"#;

pub const COPYRIGHT_PAGE: &str = r#"<html>
  <head>
    <meta content="text/html" http-equiv="content-type"/>
  </head>
  <body>
    <h1>Copyrights</h1>
    <p>The original texts of Wiktionary entries are dual-licensed to the public under both the <a href="https://en.wiktionary.org/wiki/Wiktionary:Text_of_Creative_Commons_Attribution-ShareAlike_3.0_Unported_License">Creative Commons Attribution-ShareAlike 3.0 Unported License</a> (CC-BY-SA) and the <a href="https://en.wiktionary.org/wiki/Wiktionary:Text_of_the_GNU_Free_Documentation_License">GNU Free Documentation License (GFDL)</a>. This work adheres to the same licensing terms.</p>
  </body>
</html>
"#;

/// Cover page showing the title and author.
pub fn cover_page(title: &str, author: &str) -> String {
    format!(
        r#"<html>
  <head>
    <meta content="text/html" http-equiv="content-type"/>
  </head>
  <body>
    <h1>{}</h1>
    <h2><em>{}</em></h2>
  </body>
</html>
"#,
        escape_text(title),
        escape_text(author)
    )
}
