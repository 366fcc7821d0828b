use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;
use vibe_core::{MemorySession, PostId, Tab};

use crate::media::load_image;
use crate::render::{render_explore, render_feed, render_modal, render_profile, render_tabs};

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Войти: создать локального пользователя (без пароля).
    Login {
        handle: String,
        name: String,
        #[arg(long, default_value = "")]
        bio: String,
    },
    /// Переключить вкладку: home, profile, search.
    Tab { tab: Tab },
    /// Записать текст черновика поста.
    Write {
        #[arg(
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        text: Vec<String>,
    },
    /// Прикрепить картинку к черновику.
    Attach { path: PathBuf },
    /// Убрать картинку из черновика.
    Detach,
    /// Опубликовать черновик.
    Publish,
    /// Записать текст и сразу опубликовать.
    Post {
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Поставить или снять лайк.
    Like { post: PostId },
    /// Прокомментировать пост.
    Comment {
        post: PostId,
        #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Открыть картинку поста.
    Open { post: PostId },
    /// Закрыть открытую картинку.
    Close,
    /// Показать текущую (или указанную) вкладку.
    Show { tab: Option<Tab> },
    /// Вывести ленту в JSON.
    Dump,
    /// Выйти.
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Reply {
    pub(crate) output: String,
    pub(crate) quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    fn silent() -> Self {
        Self::default()
    }
}

pub(crate) struct Shell {
    session: MemorySession,
    max_image_bytes: usize,
}

impl Shell {
    pub(crate) fn new(session: MemorySession, max_image_bytes: usize) -> Self {
        Self {
            session,
            max_image_bytes,
        }
    }

    pub(crate) fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// Выполняет одну строку. Отклонённое действие ничего не печатает.
    pub(crate) async fn execute(&mut self, line: &str) -> Reply {
        let args = match split_args(line) {
            Ok(args) if args.is_empty() => return Reply::silent(),
            Ok(args) => args,
            Err(err) => return Reply::text(format!("{err}\n")),
        };

        let command = match Line::try_parse_from(args) {
            Ok(line) => line.command,
            Err(err) => return Reply::text(err.render().to_string()),
        };
        debug!(?command, "shell command");

        match self.run(command).await {
            Ok(reply) => reply,
            Err(err) => Reply::text(format!("Ошибка: {err:#}\n")),
        }
    }

    async fn run(&mut self, command: ShellCommand) -> Result<Reply> {
        let reply = match command {
            ShellCommand::Login { handle, name, bio } => {
                if self.session.login(&handle, &name, &bio) {
                    Reply::text(format!("Добро пожаловать, {}!\n", name.trim()))
                } else {
                    Reply::silent()
                }
            }
            ShellCommand::Tab { tab } => {
                self.session.select_tab(tab);
                Reply::text(self.render(tab))
            }
            ShellCommand::Write { text } => {
                self.session.view_mut().set_draft_text(text.join(" "));
                Reply::silent()
            }
            ShellCommand::Attach { path } => {
                let image = load_image(&path, self.max_image_bytes).await?;
                let summary = image.to_string();
                self.session.view_mut().attach_image(image);
                Reply::text(format!("Прикреплено: {summary}\n"))
            }
            ShellCommand::Detach => {
                self.session.view_mut().remove_image();
                Reply::silent()
            }
            ShellCommand::Publish => self.publish(),
            ShellCommand::Post { text } => {
                // отклонённый пост не должен оставить свой текст в черновике
                let previous = self.session.view().draft_text().to_string();
                self.session.view_mut().set_draft_text(text.join(" "));
                match self.session.publish() {
                    Some(id) => Reply::text(format!("Опубликовано: #{id}\n")),
                    None => {
                        self.session.view_mut().set_draft_text(previous);
                        Reply::silent()
                    }
                }
            }
            ShellCommand::Like { post } => {
                self.session.like(post);
                Reply::silent()
            }
            ShellCommand::Comment { post, text } => {
                let previous = self.session.view().comment_draft(post).to_string();
                self.session
                    .view_mut()
                    .set_comment_draft(post, text.join(" "));
                match self.session.submit_comment(post) {
                    Some(id) => Reply::text(format!("Комментарий #{id} добавлен\n")),
                    None => {
                        self.session.view_mut().set_comment_draft(post, previous);
                        Reply::silent()
                    }
                }
            }
            ShellCommand::Open { post } => {
                if self.session.open_image(post) {
                    Reply::text(render_modal(self.session.modal_image().as_ref()))
                } else {
                    Reply::silent()
                }
            }
            ShellCommand::Close => {
                self.session.close_image();
                Reply::silent()
            }
            ShellCommand::Show { tab } => {
                let tab = tab.unwrap_or(self.session.view().tab());
                Reply::text(self.render(tab))
            }
            ShellCommand::Dump => {
                let json = serde_json::to_string_pretty(&self.session.feed_cards())?;
                Reply::text(format!("{json}\n"))
            }
            ShellCommand::Quit => Reply {
                output: String::new(),
                quit: true,
            },
        };
        Ok(reply)
    }

    fn publish(&mut self) -> Reply {
        match self.session.publish() {
            Some(id) => Reply::text(format!("Опубликовано: #{id}\n")),
            None => Reply::silent(),
        }
    }

    fn render(&self, tab: Tab) -> String {
        let body = match tab {
            Tab::Home => render_feed(&self.session.feed_cards()),
            Tab::Profile => render_profile(self.session.profile().as_ref()),
            Tab::Search => render_explore(&self.session.explore()),
        };
        format!("{}\n\n{body}", render_tabs(tab))
    }
}

/// Делит строку на слова по пробелам; текст в двойных кавычках считается одним словом.
fn split_args(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            '\\' if in_quotes => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        bail!("unclosed quote");
    }
    if has_token {
        args.push(current);
    }
    Ok(args)
}
