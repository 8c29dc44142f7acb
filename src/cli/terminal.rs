use super::*;
use crate::session::*;
use colored::Colorize;
use dialoguer::Input;
use tokio::sync::mpsc::UnboundedReceiver;

/// Stands in for the board widget: prints every notice and turns typed lines into drops.
pub struct Terminal {
    handle: SessionHandle,
}

impl From<SessionHandle> for Terminal {
    fn from(handle: SessionHandle) -> Self {
        Self { handle }
    }
}

impl Terminal {
    pub async fn run(self, notices: UnboundedReceiver<Notice>) -> anyhow::Result<()> {
        tokio::spawn(Self::render(notices));
        loop {
            let line = tokio::task::spawn_blocking(Self::prompt).await??;
            match line.parse::<Entry>() {
                Ok(Entry::Quit) => return Ok(()),
                Ok(Entry::Board) => self.board().await?,
                Ok(Entry::Resume) => match self.handle.resume().await {
                    Ok(phase) => println!("{}", phase.to_string().dimmed()),
                    Err(e) => println!("{}", e.to_string().yellow()),
                },
                Ok(Entry::Move(ply)) => match self.handle.play(ply).await {
                    Ok(_) => {}
                    Err(SessionError::Closed) => return Err(SessionError::Closed.into()),
                    Err(e) => println!("{}", e.to_string().yellow()),
                },
                Err(e) => println!("{}", e.yellow()),
            }
        }
    }
}

impl Terminal {
    fn prompt() -> anyhow::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt("move")
            .report(false)
            .interact_text()?)
    }
    async fn board(&self) -> anyhow::Result<()> {
        let snapshot = self.handle.snapshot().await?;
        println!("{}", Diagram(&snapshot.fen));
        println!("{}", snapshot.phase);
        if snapshot.discarded > 0 {
            println!("{}", format!("{} stray messages ignored", snapshot.discarded).dimmed());
        }
        Ok(())
    }
    async fn render(mut notices: UnboundedReceiver<Notice>) {
        while let Some(notice) = notices.recv().await {
            match notice {
                Notice::Started { fen } => println!("\n{}\n", Diagram(&fen)),
                Notice::Moved(record) => {
                    println!("\n{}\n", Diagram(&record.fen));
                    println!("{}: {}", record.color.to_string().bold(), record.ply);
                    if !record.annotation.is_empty() {
                        println!("{}", record.annotation.italic().cyan());
                    }
                }
                Notice::Turn { color, strategy } => {
                    println!("{}", format!("{} to move ({})", color, strategy).dimmed())
                }
                Notice::Stalled { color, error, .. } => println!(
                    "{}",
                    format!("{} is stuck: {} (type `resume` to retry)", color, error).yellow()
                ),
                Notice::Over(outcome) => println!("\n{}", outcome.to_string().bold().green()),
            }
        }
    }
}
