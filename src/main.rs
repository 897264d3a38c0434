use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use unit_converter::config::{Config, load_config};
use unit_converter::error::AppError;
use unit_converter::ui::{self, App, render};

const APP_DIR: &str = "unit-converter";

/// 获取数据目录路径 (~/.local/share/unit-converter/)，存放日志
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join(APP_DIR);

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 配置文件路径，UNIT_CONVERTER_CONFIG 优先
fn get_config_path() -> io::Result<PathBuf> {
    if let Ok(path) = std::env::var("UNIT_CONVERTER_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?;

    Ok(config_dir.join(APP_DIR).join("config.toml"))
}

/// 初始化日志，写入文件（终端被界面占用）
fn init_tracing(config: &Config) -> io::Result<PathBuf> {
    let log_path = get_data_dir()?.join("unit-converter.log");
    let file = File::options().create(true).append(true).open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(log_path)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "fatal");
            eprintln!("unit-converter: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config_path = get_config_path()?;
    let config = load_config(&config_path)?;
    let log_path = init_tracing(&config)?;
    info!(
        config = %config_path.display(),
        log = %log_path.display(),
        initial_category = %config.initial_category,
        "starting"
    );

    // 创建应用状态
    let mut app = App::new(config.initial_category);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
