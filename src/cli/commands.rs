use super::*;
use crate::store::{Context, FileStore, StateStore};
use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, info};

/// 命令执行结果，对应进程退出码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// 顶层帮助文本
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// 解析命令行并针对状态文件执行一条命令
pub fn run<I, T>(args: I) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let cli = match parse_args(args, &mut out, &mut err) {
        Ok(cli) => cli,
        Err(outcome) => return outcome,
    };

    crate::init_logging(cli.verbose);
    debug!("State file: {:?}", cli.state);

    let store = FileStore::new(cli.state);
    Dispatcher::new(store, out, err).dispatch(cli.command)
}

/// 解析命令行，失败时写出提示并给出退出结果
pub fn parse_args<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> Result<Cli, Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    Cli::try_parse_from(&args).map_err(|e| {
        let first = args.get(1).map(|arg| arg.to_string_lossy().into_owned());
        report_parse_error(&e, first.as_deref(), out, err)
    })
}

/// 将 clap 的解析结果映射为输出与退出码
///
/// 帮助信息成功退出；缺少命令、未知命令及其它解析错误均失败退出。
/// `first` 为第一个命令行参数，无法识别的首个选项同样按未知命令处理。
pub fn report_parse_error(
    error: &clap::Error,
    first: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Outcome {
    let unknown = match error.kind() {
        ErrorKind::InvalidSubcommand => context_string(error, ContextKind::InvalidSubcommand),
        ErrorKind::UnknownArgument => context_string(error, ContextKind::InvalidArg)
            .filter(|arg| first == Some(*arg)),
        _ => None,
    };

    let (outcome, written) = match (error.kind(), unknown) {
        (_, Some(command)) => {
            let written = writeln!(err, "Unknown command: {}", command)
                .and_then(|_| write!(out, "{}", usage()));
            (Outcome::Failure, written)
        }
        (ErrorKind::DisplayHelp, None) => (Outcome::Success, write!(out, "{}", error)),
        (ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand | ErrorKind::MissingSubcommand, None) => {
            (Outcome::Failure, write!(out, "{}", usage()))
        }
        (ErrorKind::InvalidSubcommand, None) => {
            let written = writeln!(err, "Unknown command: {}", first.unwrap_or_default())
                .and_then(|_| write!(out, "{}", usage()));
            (Outcome::Failure, written)
        }
        _ => (Outcome::Failure, write!(err, "{}", error)),
    };

    match written {
        Ok(()) => outcome,
        Err(_) => Outcome::Failure,
    }
}

fn context_string(error: &clap::Error, kind: ContextKind) -> Option<&str> {
    match error.get(kind) {
        Some(ContextValue::String(value)) => Some(value.as_str()),
        _ => None,
    }
}

/// 命令分发器
///
/// 持有状态存储与输出流，每次调用执行一条命令
pub struct Dispatcher<S, W, E> {
    store: S,
    out: W,
    err: E,
}

impl<S: StateStore, W: Write, E: Write> Dispatcher<S, W, E> {
    pub fn new(store: S, out: W, err: E) -> Self {
        Self { store, out, err }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatch(&mut self, command: Commands) -> Outcome {
        let result = match command {
            Commands::Init(args) => self.init_context(args),
            Commands::Add(args) => self.add_files(args),
            Commands::Status(args) => self.status(args),
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                let _ = writeln!(self.err, "Error: {:#}", e);
                Outcome::Failure
            }
        }
    }

    fn init_context(&mut self, _args: InitArgs) -> Result<Outcome> {
        info!("Initializing context at {}", self.store.location());
        self.store.initialize()?;
        writeln!(self.out, "Initialized empty context in {}", self.store.location())?;
        Ok(Outcome::Success)
    }

    fn add_files(&mut self, args: AddArgs) -> Result<Outcome> {
        if args.files.is_empty() {
            writeln!(self.err, "Error: no files specified")?;
            writeln!(self.err, "Usage: ctx add <file>...")?;
            return Ok(Outcome::Failure);
        }

        info!("Adding files: {:?}", args.files);
        let files = &args.files;
        let context = self
            .store
            .update(&mut |context: &mut Context| context.add(files.iter().cloned()))?;

        for file in files {
            writeln!(self.out, "Adding file: {}", file)?;
        }
        debug!("Context now tracks {} file(s)", context.len());
        Ok(Outcome::Success)
    }

    fn status(&mut self, _args: StatusArgs) -> Result<Outcome> {
        let context = self.store.load()?;
        if context.is_empty() {
            writeln!(self.out, "No files tracked.")?;
        } else {
            writeln!(self.out, "Tracked files:")?;
            for file in context.files() {
                writeln!(self.out, "  {}", file)?;
            }
        }
        Ok(Outcome::Success)
    }
}
