use std::collections::VecDeque;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};
use crate::core::library::LibraryResult;

// Console abstracts line based user interaction.
#[async_trait]
pub trait Console: Send {
    // prints the prompt without a newline and reads one line; None at end of input
    async fn read_line(&mut self, prompt: &str) -> LibraryResult<Option<String>>;

    async fn print_line(&mut self, line: &str) -> LibraryResult<()>;
}

// stdin reads are not cancellable; the shell only reads when it waits for the user
pub struct StdConsole {
    input: Lines<BufReader<Stdin>>,
    output: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()).lines(),
            output: tokio::io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        StdConsole::new()
    }
}

#[async_trait]
impl Console for StdConsole {
    async fn read_line(&mut self, prompt: &str) -> LibraryResult<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;
        Ok(self.input.next_line().await?)
    }

    async fn print_line(&mut self, line: &str) -> LibraryResult<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }
}

/// Replays scripted input lines and keeps everything printed.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl MemoryConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: vec![],
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

#[async_trait]
impl Console for MemoryConsole {
    async fn read_line(&mut self, _prompt: &str) -> LibraryResult<Option<String>> {
        Ok(self.input.pop_front())
    }

    async fn print_line(&mut self, line: &str) -> LibraryResult<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::console::{Console, MemoryConsole};

    #[tokio::test]
    async fn test_should_replay_input_and_capture_output() {
        let mut console = MemoryConsole::new(&["first", "second"]);
        assert_eq!(Some("first".to_string()), console.read_line(">").await.expect("read"));
        console.print_line("hello").await.expect("print");
        assert_eq!(Some("second".to_string()), console.read_line(">").await.expect("read"));
        assert_eq!(None, console.read_line(">").await.expect("read"));
        assert_eq!(vec!["hello".to_string()], console.output());
        assert_eq!(0, console.remaining_input());
    }
}
