//! Growflow - a terminal viewer for farm irrigation monitoring data.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use growflow::analytics::{self, CurrentValues, SelectionSummary};
use growflow::app::{App, Focus};
use growflow::data::{DataReader, FarmData, Metric};
use growflow::overrides::SprinklingOverrides;
use growflow::raster::{ColorScale, OverlayCache, Rgb};
use growflow::selection::Route;
use growflow::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use serde_json::json;
use std::io;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "growflow")]
#[command(about = "A terminal viewer for farm irrigation monitoring data", long_about = None)]
struct Args {
    /// Dataset bundle (.json) or published data directory
    path: PathBuf,

    /// Start at this route, e.g. /map/2024-06-01/pixel/3-4
    #[arg(long, default_value = "/map")]
    route: String,

    /// Write the overlay data URI of the route's date to FILE and exit
    #[arg(long, value_name = "FILE")]
    overlay: Option<PathBuf>,

    /// Print the route's projected series as JSON and exit
    #[arg(long)]
    series: bool,

    /// Layer rendered into the overlay
    #[arg(long, default_value = "deficit")]
    metric: Metric,

    /// Color scale domain as MIN,MAX
    #[arg(long, value_parser = parse_domain, default_value = "0,500")]
    domain: (f64, f64),

    /// Color scale stops as FROM,TO hex colors
    #[arg(long, value_parser = parse_colors, default_value = "#e3f2fd,#2196f3")]
    colors: (Rgb, Rgb),

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn parse_domain(s: &str) -> std::result::Result<(f64, f64), String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{}'", s))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad domain bound '{}': {}", v, e))
    };
    Ok((parse(min)?, parse(max)?))
}

fn parse_colors(s: &str) -> std::result::Result<(Rgb, Rgb), String> {
    let (from, to) = s
        .split_once(',')
        .ok_or_else(|| format!("expected FROM,TO, got '{}'", s))?;
    let parse = |v: &str| Rgb::from_hex(v).map_err(|e| e.to_string());
    Ok((parse(from)?, parse(to)?))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Growflow");
    }

    if !args.path.exists() {
        eprintln!("Error: Path not found: {}", args.path.display());
        std::process::exit(1);
    }

    let data = DataReader::read_file(&args.path)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;
    let scale = ColorScale::new(args.colors.0, args.colors.1, args.domain)?;
    let route = Route::parse(&args.route);

    if args.overlay.is_some() || args.series {
        return run_headless(&args, &data, &scale, &route);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new(args.path.clone(), data, scale, &route);
    app.metric = args.metric;
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Growflow exited");
    }

    Ok(())
}

fn run_headless(args: &Args, data: &FarmData, scale: &ColorScale, route: &Route) -> Result<()> {
    let (date, selection) = route.settle(data);

    if let Some(path) = &args.overlay {
        let uri = OverlayCache::new().get_or_render(data, &date, args.metric, scale)?;
        write_text(path, &uri)?;
        tracing::info!("Wrote {} overlay for {} to {}", args.metric, date, path.display());
    }

    if args.series {
        let overrides = SprinklingOverrides::new();
        let series = analytics::project(data, &selection, &overrides);
        let current = CurrentValues::from_snapshot(analytics::snapshot(&series, &date));
        let report = json!({
            "route": Route::for_selection(&date, selection.selection()).to_string(),
            "date": &date,
            "summary": SelectionSummary::new(data, &selection),
            "current": current,
            "series": series,
            "overview": analytics::overall_summary(data, &date, &overrides),
            "grid": {
                "width": data.grid.width(),
                "height": data.grid.height(),
                "bounds": data.grid.bounds(),
                "lines": data.grid.grid_lines(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_edit();
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Dialog mode - handle separately
        if app.dialog.is_open() {
            match key.code {
                KeyCode::Enter => {
                    app.dialog.confirm();
                }
                KeyCode::Esc => app.dialog.cancel(),
                KeyCode::Backspace => app.dialog.backspace(),
                KeyCode::Char(c) => app.dialog.input(c),
                _ => {}
            }
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            (KeyModifiers::NONE, KeyCode::Tab) => app.toggle_focus(),
            (KeyModifiers::NONE, KeyCode::Esc) => app.clear_selection(),
            (KeyModifiers::NONE, KeyCode::Char('m')) => app.cycle_metric(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
            (KeyModifiers::NONE, KeyCode::Char('s')) => app.open_sprinkling_dialog(),
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_overlay(),
            (KeyModifiers::NONE, KeyCode::Char('[')) => app.move_day_cursor(-1),
            (KeyModifiers::NONE, KeyCode::Char(']')) => app.move_day_cursor(1),

            // Plot table navigation
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k'))
                if app.focus == Focus::Plots =>
            {
                app.move_plot_cursor(-1)
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j'))
                if app.focus == Focus::Plots =>
            {
                app.move_plot_cursor(1)
            }
            (KeyModifiers::NONE, KeyCode::Enter) if app.focus == Focus::Plots => {
                app.select_highlighted_plot()
            }

            // Map navigation, north up
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.move_cursor(1, 0)
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.move_cursor(-1, 0)
            }
            (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                app.move_cursor(0, -1)
            }
            (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                app.move_cursor(0, 1)
            }
            (KeyModifiers::NONE, KeyCode::Enter) => app.select_pixel_at_cursor(),
            (KeyModifiers::NONE, KeyCode::Char('p')) => app.select_plot_at_cursor(),

            _ => {}
        }
    }
}
