use std::{io::{self, Write}, process::{ChildStdin, Command, Stdio}, thread};

use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into word tokens.
///
/// Punctuation is never a token. Two tokens are the same term iff the
/// strings are equal, so whatever case folding a tokenizer does (or
/// doesn't) decides the vocabulary.
///
/// Any `Fn(&str) -> Vec<String>` is a tokenizer:
/// ```
/// use tfidf_matrix::{Tokenizer, Vocabulary};
/// let split = |text: &str| text.split(' ').map(str::to_string).collect::<Vec<_>>();
/// let vocab = Vocabulary::from_corpus(&["a b", "b c"], &split);
/// assert_eq!(vocab.size(), 3);
/// assert_eq!(split.tokenize("x y"), vec!["x", "y"]);
/// ```
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    #[inline]
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// `true` when the token has no letter or digit in it
#[inline]
pub fn is_punct(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

/// Unicode word boundaries (UAX #29). Case is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

/// Whitespace split with punctuation trimmed off both ends
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Pipes text through an external tokenizer process.
///
/// The command reads the text on stdin and prints one token per line;
/// only the first tab/space separated field of a line is used, so
/// morphological analyzers that append features work as-is. A line that
/// is exactly `EOS` (end-of-sentence marker) and punctuation-only tokens
/// are dropped.
///
/// A failing command is logged and yields no tokens. The command must be
/// deterministic, since every matrix pass tokenizes again.
#[derive(Debug, Clone)]
pub struct CommandTokenizer {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandTokenizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn run(&self, text: &str) -> io::Result<Vec<String>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        // stdout を読みながら stdin へ書く (パイプが詰まると双方ブロックする)
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|s| {
            let writer = s.spawn(move || feed_stdin(stdin, text));
            let output = child.wait_with_output();
            (writer.join(), output)
        });
        let output = output?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("exited with {:?}: {}", output.status.code(), stderr.trim()),
            ));
        }
        written.map_err(|_| io::Error::new(io::ErrorKind::Other, "stdin writer panicked"))??;
        Ok(parse_token_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

// drop で stdin を閉じ、子プロセスに EOF を送る
fn feed_stdin(stdin: Option<ChildStdin>, text: &str) -> io::Result<()> {
    if let Some(mut stdin) = stdin {
        stdin.write_all(text.as_bytes())?;
    }
    Ok(())
}

impl Tokenizer for CommandTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        match self.run(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(program = %self.program, error = %e, "tokenizer command failed, no tokens");
                Vec::new()
            }
        }
    }
}

fn parse_token_lines(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| *line != "EOS")
        .filter_map(|line| line.split(|c: char| c == '\t' || c.is_whitespace()).find(|f| !f.is_empty()))
        .filter(|tok| !is_punct(tok))
        .map(str::to_string)
        .collect()
}

/// Sentence segmentation for turning running text into documents.
/// Newlines and tabs become spaces; empty sentences are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(|s| s.replace(['\n', '\t'], " ").trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
