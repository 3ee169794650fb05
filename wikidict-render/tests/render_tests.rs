use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wikidict_model::{Entry, Form, Sense, Sound, Synonym, Translation};
use wikidict_render::{
    build_outline, render_entry, RenderError, RenderOptions, MAX_INFLECTIONS, MAX_OUTLINE_DEPTH,
};

fn parse(line: &str) -> Entry {
    Entry::from_json_line(line).unwrap()
}

fn render(entry: &Entry) -> String {
    render_entry(entry, &RenderOptions::default()).unwrap()
}

fn form(s: &str) -> Form {
    Form {
        form: s.into(),
        tags: vec![],
    }
}

fn translation(word: &str) -> Translation {
    Translation {
        word: word.into(),
        lang_code: Some("xx".into()),
    }
}

// ── Scenarios ────────────────────────────────────────────────────

#[test]
fn run_scenario() {
    let entry = parse(
        r#"{"word":"run","pos":"verb","senses":[["move","quickly"],["move","on foot"]],"forms":[{"form":"running","tags":["pres"]}]}"#,
    );
    assert_eq!(
        render(&entry),
        concat!(
            r#"<idx:entry name="default" scriptable="yes" spell="yes">"#,
            r#"<dt><idx:orth value="run">run<idx:infl><idx:iform value="running"/></idx:infl></idx:orth></dt>"#,
            "<dd><i>v.</i> <ol><li>move<ol><li>quickly</li><li>on foot</li></ol></li></ol></dd>",
            "</idx:entry>"
        )
    );
}

#[test]
fn bare_headword() {
    assert_eq!(
        render(&Entry::new("zyzzyva")),
        concat!(
            r#"<idx:entry name="default" scriptable="yes" spell="yes">"#,
            r#"<dt><idx:orth value="zyzzyva">zyzzyva</idx:orth></dt><dd></dd></idx:entry>"#
        )
    );
}

#[test]
fn unknown_pos_passes_through() {
    let mut entry = Entry::new("ba");
    entry.pos = Some("classifier".into());
    assert!(render(&entry).contains("<dd><i>classifier</i> </dd>"));
}

#[test]
fn etymology_is_trailing_block() {
    let mut entry = Entry::new("cat");
    entry.senses = vec![Sense::new(["animal"])];
    entry.etymology_text = Some("From Latin cattus & co.".into());
    let html = render(&entry);
    assert!(html.ends_with(
        "<ol><li>animal</li></ol><p><i>Etymology</i>: From Latin cattus &amp; co.</p></dd></idx:entry>"
    ));
}

#[test]
fn blank_etymology_is_omitted() {
    let mut entry = Entry::new("cat");
    entry.etymology_text = Some("  ".into());
    assert!(!render(&entry).contains("Etymology"));
}

// ── Inflections ──────────────────────────────────────────────────

#[test]
fn inflections_capped_at_254() {
    let mut entry = Entry::new("many");
    entry.forms = (0..150).map(|i| form(&format!("f{i}"))).collect();
    entry.translations = (0..150).map(|i| translation(&format!("t{i}"))).collect();

    let html = render(&entry);
    assert_eq!(html.matches("<idx:iform ").count(), MAX_INFLECTIONS);
    assert_eq!(MAX_INFLECTIONS, 254);
    assert!(html.contains(r#"<idx:iform value="t103"/>"#));
    assert!(!html.contains(r#"<idx:iform value="t104"/>"#));
}

#[test]
fn non_latin_translations_excluded_from_inflections_only() {
    let mut entry = Entry::new("cat");
    entry.translations = vec![translation("кошка"), translation("gato"), translation("猫")];
    entry.senses = vec![Sense::new(["кошка"])];

    let html = render(&entry);
    assert!(html.contains(r#"<idx:infl><idx:iform value="gato"/></idx:infl>"#));
    assert!(html.contains("<li>кошка</li>"));
}

#[test]
fn quotes_in_inflections_substituted() {
    let mut entry = Entry::new("say");
    entry.forms = vec![form(r#"said "it""#)];
    assert!(render(&entry).contains(r#"<idx:iform value="said &quot;it&quot;"/>"#));
}

#[test]
fn markup_in_text_is_escaped() {
    let mut entry = Entry::new("<b>");
    entry.senses = vec![Sense::new(["a <tag> & more"])];
    let html = render(&entry);
    assert!(html.contains(r#"<idx:orth value="&lt;b&gt;">&lt;b&gt;"#));
    assert!(html.contains("<li>a &lt;tag&gt; &amp; more</li>"));
}

// ── Options ──────────────────────────────────────────────────────

#[test]
fn pronunciations_when_enabled() {
    let mut entry = Entry::new("cat");
    entry.sounds = vec![
        Sound {
            ipa: Some("/kæt/".into()),
            tags: vec!["UK".into(), "US".into()],
        },
        Sound {
            ipa: None,
            tags: vec!["audio".into()],
        },
        Sound {
            ipa: Some("[kʰæt]".into()),
            tags: vec![],
        },
    ];
    assert!(!render(&entry).contains("phonetic"));

    let options = RenderOptions {
        pronunciations: true,
        ..Default::default()
    };
    let html = render_entry(&entry, &options).unwrap();
    assert!(html.contains(
        "</idx:orth> <phonetic><i>UK, US</i> /kæt/, [kʰæt]</phonetic></dt>"
    ));
}

#[test]
fn forms_when_enabled() {
    let mut entry = Entry::new("run");
    entry.forms = vec![
        Form {
            form: "running".into(),
            tags: vec!["present".into(), "participle".into()],
        },
        Form {
            form: String::new(),
            tags: vec!["table-tags".into()],
        },
        form("ran"),
    ];
    entry.etymology_text = Some("Old English".into());
    entry.synonyms = vec![Synonym { word: "sprint".into() }];
    assert!(!render(&entry).contains("Forms"));

    let options = RenderOptions {
        forms: true,
        synonyms: true,
        ..Default::default()
    };
    let html = render_entry(&entry, &options).unwrap();
    assert!(html.contains(
        "<p><i>Etymology</i>: Old English</p><p><i>Forms</i>: running (present, participle), ran</p><p><i>Synonyms</i>: sprint</p></dd>"
    ));
}

#[test]
fn synonyms_when_enabled() {
    let mut entry = Entry::new("cat");
    entry.synonyms = vec![
        Synonym { word: "moggy".into() },
        Synonym { word: String::new() },
        Synonym { word: "puss".into() },
    ];
    assert!(!render(&entry).contains("Synonyms"));

    let options = RenderOptions {
        synonyms: true,
        ..Default::default()
    };
    let html = render_entry(&entry, &options).unwrap();
    assert!(html.contains("<p><i>Synonyms</i>: moggy, puss</p></dd>"));
}

// ── Errors ───────────────────────────────────────────────────────

#[test]
fn deep_but_sane_outline_renders() {
    let mut entry = Entry::new("deep");
    entry.senses = vec![Sense::new(vec!["x"; 65])];
    let html = render(&entry);
    assert_eq!(html.matches("<ol>").count(), 65);
}

#[test]
fn runaway_outline_is_an_error() {
    let mut entry = Entry::new("deep");
    entry.senses = vec![Sense::new(vec!["x"; MAX_OUTLINE_DEPTH + 1])];
    let err = render_entry(&entry, &RenderOptions::default()).unwrap_err();
    assert_eq!(
        err,
        RenderError::OutlineTooDeep {
            depth: MAX_OUTLINE_DEPTH
        }
    );
}

// ── Properties ───────────────────────────────────────────────────

fn senses_strategy() -> impl Strategy<Value = Vec<Sense>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec!["a", "b", "c"]), 1..4).prop_map(Sense::new),
        0..12,
    )
}

proptest! {
    #[test]
    fn outline_is_deterministic(senses in senses_strategy()) {
        let mut entry = Entry::new("w");
        entry.senses = senses;
        prop_assert_eq!(render(&entry), render(&entry));
    }

    #[test]
    fn top_level_glosses_are_unique(senses in senses_strategy()) {
        let outline = build_outline(&senses).unwrap();
        let mut keys: Vec<_> = outline.iter().map(|n| n.gloss).collect();
        let count = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), count);
    }

    #[test]
    fn every_first_gloss_appears(senses in senses_strategy()) {
        let outline = build_outline(&senses).unwrap();
        for sense in &senses {
            prop_assert!(outline.iter().any(|n| n.gloss == sense.gloss(0)));
        }
    }
}
