//! OBO 1.4 flat file parser.
//!
//! Only the tags the converter needs are interpreted; everything else is
//! skipped. `[Typedef]` and `[Instance]` stanzas are ignored.

use hpo_model::{Ontology, OntologyMetadata, SynonymScope, Term, TermId};
use tracing::{debug, trace};

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Term,
    Other,
}

/// A `[Term]` stanza collected so far.
struct PendingTerm {
    line: usize,
    id: Option<TermId>,
    name: String,
    obsolete: bool,
    definition: Option<String>,
    synonyms: Vec<(SynonymScope, String)>,
    xrefs: Vec<String>,
    subsets: Vec<String>,
    is_a: Vec<TermId>,
}

impl PendingTerm {
    fn new(line: usize) -> Self {
        Self {
            line,
            id: None,
            name: String::new(),
            obsolete: false,
            definition: None,
            synonyms: Vec::new(),
            xrefs: Vec::new(),
            subsets: Vec::new(),
            is_a: Vec::new(),
        }
    }

    fn finish(self) -> Result<Term> {
        let Some(id) = self.id else {
            return Err(IngestError::parse(self.line, "[Term] stanza without id"));
        };
        let mut term = Term::new(id, self.name).with_obsolete(self.obsolete);
        term.definition = self.definition;
        for (scope, text) in self.synonyms {
            term = term.with_synonym(scope, text);
        }
        term.xrefs.extend(self.xrefs);
        term.subsets.extend(self.subsets);
        term.is_a.extend(self.is_a);
        Ok(term)
    }
}

/// Parse an OBO document into an ontology.
pub fn parse_obo(text: &str) -> Result<Ontology> {
    let mut metadata = OntologyMetadata::default();
    let mut terms = Vec::new();
    let mut section = Section::Header;
    let mut pending: Option<PendingTerm> = None;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('!') {
            continue;
        }
        if let Some(name) = stanza_name(line) {
            if let Some(term) = pending.take() {
                terms.push(term.finish()?);
            }
            section = if name == "Term" {
                pending = Some(PendingTerm::new(line_no));
                Section::Term
            } else {
                trace!(stanza = name, line = line_no, "skipping stanza");
                Section::Other
            };
            continue;
        }
        let (tag, value) = split_tag(line).ok_or_else(|| {
            IngestError::parse(line_no, format!("expected `tag: value`, got {line:?}"))
        })?;
        match section {
            Section::Header => apply_header_tag(&mut metadata, tag, value),
            Section::Term => {
                if let Some(term) = pending.as_mut() {
                    apply_term_tag(term, tag, value, line_no)?;
                }
            }
            Section::Other => {}
        }
    }
    if let Some(term) = pending.take() {
        terms.push(term.finish()?);
    }
    debug!(term_count = terms.len(), "parsed OBO document");
    Ok(Ontology::new(metadata, terms)?)
}

fn stanza_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

fn split_tag(line: &str) -> Option<(&str, &str)> {
    let (tag, value) = line.split_once(':')?;
    let tag = tag.trim();
    if tag.is_empty() || tag.contains(char::is_whitespace) {
        return None;
    }
    Some((tag, value.trim()))
}

fn apply_header_tag(metadata: &mut OntologyMetadata, tag: &str, value: &str) {
    let value = unescape(strip_trailing(value));
    match tag {
        "format-version" => metadata.format_version = Some(value),
        "data-version" => metadata.data_version = Some(value),
        "ontology" => metadata.ontology = Some(value),
        "date" => metadata.date = Some(value),
        "default-namespace" => metadata.default_namespace = Some(value),
        "remark" => metadata.remarks.push(value),
        _ => {}
    }
}

fn apply_term_tag(term: &mut PendingTerm, tag: &str, value: &str, line: usize) -> Result<()> {
    match tag {
        "id" => {
            let id = TermId::new(unescape(strip_trailing(value)))
                .map_err(|err| IngestError::parse(line, err.to_string()))?;
            term.id = Some(id);
        }
        "name" => term.name = unescape(strip_trailing(value)),
        "def" => {
            let (text, _) = parse_quoted(value, line)?;
            term.definition = Some(text);
        }
        "synonym" => {
            let (text, rest) = parse_quoted(value, line)?;
            let token = rest.split_whitespace().next().unwrap_or("");
            let scope = match SynonymScope::parse(token) {
                Some(scope) => scope,
                None => {
                    debug!(line, scope = token, "synonym without known scope, using RELATED");
                    SynonymScope::Related
                }
            };
            term.synonyms.push((scope, text));
        }
        "xref" => {
            if let Some(id) = first_token(value) {
                term.xrefs.push(unescape(id));
            }
        }
        "subset" => {
            if let Some(subset) = first_token(value) {
                term.subsets.push(unescape(subset));
            }
        }
        "is_a" => {
            if let Some(parent) = first_token(value) {
                let parent = TermId::new(unescape(parent))
                    .map_err(|err| IngestError::parse(line, err.to_string()))?;
                term.is_a.push(parent);
            }
        }
        "is_obsolete" => term.obsolete = strip_trailing(value) == "true",
        _ => {}
    }
    Ok(())
}

fn first_token(value: &str) -> Option<&str> {
    strip_trailing(value).split_whitespace().next()
}

/// Drop a trailing `! comment` and `{modifier}` block outside quotes.
fn strip_trailing(value: &str) -> &str {
    let mut in_quote = false;
    let mut escaped = false;
    let mut cut = value.len();
    for (pos, ch) in value.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '"' => in_quote = !in_quote,
            '!' | '{' if !in_quote => {
                cut = pos;
                break;
            }
            _ => {}
        }
    }
    value[..cut].trim_end()
}

/// Parse a leading quoted string, returning it unescaped and the remainder.
fn parse_quoted(value: &str, line: usize) -> Result<(String, &str)> {
    let Some(body) = value.strip_prefix('"') else {
        return Err(IngestError::parse(line, "expected quoted string"));
    };
    let mut text = String::new();
    let mut chars = body.char_indices();
    while let Some((pos, ch)) = chars.next() {
        match ch {
            '"' => return Ok((text, body[pos + 1..].trim_start())),
            '\\' => match chars.next() {
                Some((_, escaped)) => text.push(unescape_char(escaped)),
                None => break,
            },
            _ => text.push(ch),
        }
    }
    Err(IngestError::parse(line, "unterminated quoted string"))
}

/// Decode backslash escapes in an unquoted value.
fn unescape(value: &str) -> String {
    let mut text = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escaped) => text.push(unescape_char(escaped)),
                None => text.push('\\'),
            },
            _ => text.push(ch),
        }
    }
    text
}

/// Character an OBO escape sequence `\<ch>` stands for.
fn unescape_char(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'W' => ' ',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_comments_and_modifiers() {
        assert_eq!(strip_trailing("HP:0000001 ! All"), "HP:0000001");
        assert_eq!(strip_trailing("HP:1 {source=\"x\"} ! c"), "HP:1");
        assert_eq!(strip_trailing("\"a ! b\" EXACT []"), "\"a ! b\" EXACT []");
    }

    #[test]
    fn parses_escaped_quotes() {
        let (text, rest) = parse_quoted(r#""say \"hi\"" EXACT []"#, 1).expect("quoted");
        assert_eq!(text, "say \"hi\"");
        assert_eq!(rest, "EXACT []");
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        let err = parse_quoted("\"open", 7).unwrap_err();
        assert!(matches!(err, IngestError::Parse { line: 7, .. }));
    }

    #[test]
    fn splits_tags() {
        assert_eq!(split_tag("id: HP:1"), Some(("id", "HP:1")));
        assert_eq!(split_tag("no colon"), None);
        assert_eq!(split_tag("two words: x"), None);
    }

    #[test]
    fn unescapes_unquoted_values() {
        assert_eq!(unescape(r"Head \{congenital\} form"), "Head {congenital} form");
        assert_eq!(unescape(r"a\Wb\!c\\"), "a b!c\\");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn escaped_name_is_decoded() {
        let ontology =
            parse_obo("data-version: x/1\n\n[Term]\nid: X:1\nname: Head \\{congenital\\} form\n")
                .expect("parse");
        let term = ontology.terms().next().expect("term");
        assert_eq!(term.name, "Head {congenital} form");
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let ontology = parse_obo("\u{feff}data-version: hp/releases/2024-01-01\nformat-version: 1.2\n")
            .expect("parse");
        assert_eq!(
            ontology.metadata().data_version.as_deref(),
            Some("hp/releases/2024-01-01")
        );
        assert_eq!(ontology.metadata().format_version.as_deref(), Some("1.2"));
    }
}
