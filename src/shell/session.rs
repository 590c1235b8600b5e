// file: src/shell/session.rs
// description: interactive session tying the forms, controller and renderer together

use super::command::{HELP, ShellCommand};
use crate::app::Playground;
use crate::error::Result;
use crate::forms::{QueryForm, UploadForm};
use crate::render::ResultsView;
use crate::utils::logging::{format_error, format_info, format_success};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

pub struct Session {
    playground: Playground,
    upload_form: UploadForm,
    query_form: QueryForm,
    view: ResultsView,
}

impl Session {
    pub fn new(playground: Playground, view: ResultsView) -> Self {
        Self {
            playground,
            upload_form: UploadForm::new(),
            query_form: QueryForm::new(),
            view,
        }
    }

    pub fn playground(&self) -> &Playground {
        &self.playground
    }

    pub fn upload_form(&self) -> &UploadForm {
        &self.upload_form
    }

    pub fn query_form(&self) -> &QueryForm {
        &self.query_form
    }

    /// Mounts the controller, then processes lines until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.playground.mount();

        writeln!(
            out,
            "{}",
            format_info(&format!(
                "RAG Playground connected to {} (type `help`)",
                self.playground.client().base_url()
            ))
        )?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<ShellCommand>() {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command, out).await?,
                Err(e) => writeln!(out, "{}", format_error(&e.to_string()))?,
            }
            out.flush()?;
        }

        Ok(())
    }

    pub async fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        debug!("Shell command: {:?}", command);

        match command {
            ShellCommand::Title(title) => self.upload_form.set_title(title),
            ShellCommand::Text(line) => self.upload_form.push_line(&line),
            ShellCommand::Clear => self.upload_form.clear(),
            ShellCommand::Upload => match self.upload_form.submit(&self.playground).await {
                Some(notice) if notice.is_success() => {
                    writeln!(out, "{}", format_success(&notice.to_string()))?
                }
                Some(notice) => writeln!(out, "{}", format_error(&notice.to_string()))?,
                None => writeln!(out, "{}", format_info("Nothing to upload: text is empty."))?,
            },
            ShellCommand::Query(query) => self.query_form.set_query(query),
            ShellCommand::Search(query) => {
                if let Some(query) = query {
                    self.query_form.set_query(query);
                }
                self.query_form.search(&mut self.playground).await;
                write!(out, "{}", self.view.render_state(self.playground.state()))?;
            }
            ShellCommand::Ask(query) => {
                if let Some(query) = query {
                    self.query_form.set_query(query);
                }
                self.query_form.ask(&mut self.playground).await;
                write!(out, "{}", self.view.render_state(self.playground.state()))?;
            }
            ShellCommand::Show => {
                write!(out, "{}", self.view.render_state(self.playground.state()))?
            }
            ShellCommand::Help => writeln!(out, "{}", HELP)?,
            ShellCommand::Quit => {}
        }

        Ok(())
    }
}
