use regex::Regex;

use crate::settings::Settings;

/// One page-break-delimited statement: the trimmed, tag-stripped row
/// fragments left after splitting on linefeed tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statement {
    pub fragments: Vec<String>,
}

/// Splits raw script lines into statements according to the configured tag
/// vocabularies.
pub struct Splitter {
    page_break_tags: Vec<String>,
    linefeed_tags: Vec<String>,
    inline_tag: Regex,
}

impl Splitter {
    pub fn new(settings: &Settings) -> Self {
        Self {
            page_break_tags: settings.page_break_tag.clone(),
            linefeed_tags: settings.linefeed_tag.clone(),
            // Engine directives never nest; non-greedy keeps adjacent tags
            // separate.
            inline_tag: Regex::new(r"\[.*?\]").expect("inline tag pattern"),
        }
    }

    /// Splits one trimmed line into its statements, in source order. The last
    /// element is always the statement left open at the end of the line.
    pub fn split_line(&self, line: &str) -> Vec<Statement> {
        let mut texts = vec![line.to_string()];
        for tag in &self.page_break_tags {
            texts = split_each(&texts, tag);
        }
        texts.iter().map(|text| self.split_statement(text)).collect()
    }

    fn split_statement(&self, text: &str) -> Statement {
        let mut fragments = vec![text.trim().to_string()];
        for tag in &self.linefeed_tags {
            fragments = split_each(&fragments, tag);
        }
        let fragments = fragments
            .iter()
            .map(|fragment| self.inline_tag.replace_all(fragment.trim(), "").into_owned())
            .collect();
        Statement { fragments }
    }
}

/// Applies one tag to every piece produced so far. Tags are folded one at a
/// time so adjacent markers behave like repeated splitting, not like a single
/// alternation.
fn split_each(pieces: &[String], tag: &str) -> Vec<String> {
    pieces
        .iter()
        .flat_map(|piece| piece.split(tag))
        .map(str::to_string)
        .collect()
}

/// Lazy pass over a file's lines, yielding per processed line the statements
/// completed on it. The unterminated tail of each line is threaded to the
/// next one and silently dropped at end of input.
pub struct Statements<I> {
    lines: I,
    splitter: Splitter,
    carry: String,
    line_number: usize,
    in_inline_script: bool,
}

impl<I> Statements<I> {
    pub fn new(lines: I, settings: &Settings) -> Self {
        Self {
            lines,
            splitter: Splitter::new(settings),
            carry: String::new(),
            line_number: 0,
            in_inline_script: false,
        }
    }

    /// Lines that never reach the splitter: blanks, comments, labels,
    /// preprocessor lines and `[iscript]` blocks. None of them touch the
    /// carried fragment.
    fn is_excluded(&mut self, line: &str) -> bool {
        // Prefix checks come first: a commented-out [iscript] must not open
        // a script region.
        if line.is_empty() || line.starts_with(';') || line.starts_with('*') || line.starts_with('#')
        {
            return true;
        }
        if line.contains("[iscript]") {
            self.in_inline_script = true;
            return true;
        }
        if self.in_inline_script {
            if line.contains("[endscript]") {
                self.in_inline_script = false;
            }
            return true;
        }
        false
    }
}

impl<'a, I> Iterator for Statements<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = (usize, Vec<Statement>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_number += 1;
            let trimmed = line.trim();
            if self.is_excluded(trimmed) {
                continue;
            }
            let mut statements = self.splitter.split_line(trimmed);
            // The carried fragment continues the statement left open on the
            // previous line, so it joins the earliest open text of this one.
            if let Some(fragment) = statements
                .first_mut()
                .and_then(|statement| statement.fragments.last_mut())
            {
                fragment.insert_str(0, &self.carry);
            }
            let open = statements.pop().unwrap_or_default();
            self.carry = open.fragments.last().cloned().unwrap_or_default();
            return Some((self.line_number, statements));
        }
    }
}
