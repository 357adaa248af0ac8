mod render;

use render::LayoutParts;

use anyhow::{Context, Result, bail};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use playbook_blocks_config::{Config, Theme};
use playbook_blocks_engine::{Segment, io, parse_block, scan_lesson};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    fs::File,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "Usage: playbook-blocks [lesson-file-or-folder] [--dump]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Lessons,
    Segments,
}

struct App {
    root: PathBuf,
    theme: Theme,
    lessons: Vec<PathBuf>,
    lesson_state: ListState,
    segments: Vec<Segment>,
    segment_state: ListState,
    focus: Pane,
    /// Shown instead of a segment when the lesson could not be read.
    error: Option<String>,
}

impl App {
    fn new(root: PathBuf, lessons: Vec<PathBuf>, theme: Theme) -> Self {
        let mut app = Self {
            root,
            theme,
            lessons,
            lesson_state: ListState::default(),
            segments: Vec::new(),
            segment_state: ListState::default(),
            focus: Pane::Lessons,
            error: None,
        };

        if !app.lessons.is_empty() {
            app.lesson_state.select(Some(0));
            app.load_selected_lesson();
        }
        app
    }

    fn next(&mut self) {
        match self.focus {
            Pane::Lessons => {
                if step(&mut self.lesson_state, self.lessons.len(), true) {
                    self.load_selected_lesson();
                }
            }
            Pane::Segments => {
                step(&mut self.segment_state, self.segments.len(), true);
            }
        }
    }

    fn previous(&mut self) {
        match self.focus {
            Pane::Lessons => {
                if step(&mut self.lesson_state, self.lessons.len(), false) {
                    self.load_selected_lesson();
                }
            }
            Pane::Segments => {
                step(&mut self.segment_state, self.segments.len(), false);
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Lessons => Pane::Segments,
            Pane::Segments => Pane::Lessons,
        };
    }

    fn load_selected_lesson(&mut self) {
        let Some(path) = self
            .lesson_state
            .selected()
            .and_then(|i| self.lessons.get(i))
        else {
            return;
        };

        match io::read_lesson(path) {
            Ok(source) => {
                self.segments = scan_lesson(&source);
                self.error = None;
            }
            Err(e) => {
                log::warn!("failed to read {}: {e}", path.display());
                self.segments = Vec::new();
                self.error = Some(format!("Error reading lesson: {e}"));
            }
        }
        self.segment_state
            .select(if self.segments.is_empty() { None } else { Some(0) });
    }

    fn lesson_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .ok()
            .filter(|relative| !relative.as_os_str().is_empty())
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Directory that relative image paths in the selected lesson resolve against.
    fn lesson_dir(&self) -> PathBuf {
        self.lesson_state
            .selected()
            .and_then(|i| self.lessons.get(i))
            .and_then(|path| path.parent())
            .map_or_else(|| self.root.clone(), Path::to_path_buf)
    }

    fn selected_segment(&self) -> Option<&Segment> {
        self.segment_state
            .selected()
            .and_then(|i| self.segments.get(i))
    }
}

/// Moves a list selection one step with wrap-around. Returns true if it moved.
fn step(state: &mut ListState, len: usize, forward: bool) -> bool {
    if len == 0 {
        return false;
    }
    let i = match state.selected() {
        Some(i) if forward => (i + 1) % len,
        Some(i) if i == 0 => len - 1,
        Some(i) => i - 1,
        None => 0,
    };
    let moved = state.selected() != Some(i);
    state.select(Some(i));
    moved
}

struct Args {
    path: Option<PathBuf>,
    dump: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut path = None;
    let mut dump = false;
    for arg in args {
        match arg.as_str() {
            "--dump" => dump = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n{USAGE}"),
            other if path.is_none() => path = Some(PathBuf::from(other)),
            _ => bail!("too many arguments\n{USAGE}"),
        }
    }
    Ok(Args { path, dump })
}

/// Lessons under `path`, or `path` itself when it is a single file.
fn find_lessons(path: &Path) -> Result<(PathBuf, Vec<PathBuf>)> {
    if path.is_file() {
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        return Ok((root, vec![path.to_path_buf()]));
    }
    let lessons = io::scan_lessons(path)
        .with_context(|| format!("cannot open lessons at '{}'", path.display()))?;
    Ok((path.to_path_buf(), lessons))
}

fn init_logging(interactive: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    // Keep log output off the alternate screen while the previewer is up.
    if interactive {
        let log_path = env::temp_dir().join("playbook-blocks.log");
        if let Ok(file) = File::create(&log_path) {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    builder.init();
}

fn dump(lessons: &[PathBuf]) -> Result<()> {
    for path in lessons {
        let source = io::read_lesson(path)?;
        println!("==> {}", path.display());
        for segment in scan_lesson(&source) {
            println!("{segment:#?}");
            if let Some(block) = segment.block() {
                println!("{:#?}", parse_block(block));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    init_logging(!args.dump);

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let Some(lessons_path) = args.path.or(config.lessons_path) else {
        eprintln!("Error: No lessons path provided and none set in the config file");
        eprintln!("{USAGE}");
        eprintln!(
            "Or set lessons_path in a config file at {}",
            config_path.display()
        );
        process::exit(1);
    };

    let (root, lessons) = match find_lessons(&lessons_path) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };
    log::info!("{} lessons under {}", lessons.len(), root.display());

    if args.dump {
        return dump(&lessons);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(root, lessons, config.theme);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
                _ => {}
            }
        }
    }
}

/// Places wrapped content and its flowing text side by side, the content
/// taking the layout's share of the width.
fn render_layout_columns(f: &mut Frame, area: Rect, parts: LayoutParts) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    f.render_widget(Paragraph::new(parts.header.clone()), rows[0]);

    let content_width = parts.layout.size.columns_of(rows[1].width);
    let content_first = parts.layout.content_first();
    let (first, second) = parts.in_reading_order();
    let constraints = if content_first {
        [Constraint::Length(content_width), Constraint::Min(0)]
    } else {
        [
            Constraint::Length(rows[1].width.saturating_sub(content_width)),
            Constraint::Min(0),
        ]
    };
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(rows[1]);

    f.render_widget(Paragraph::new(first).wrap(Wrap { trim: false }), cells[0]);
    f.render_widget(Paragraph::new(second).wrap(Wrap { trim: false }), cells[1]);
}

fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let lists = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(columns[0]);

    let highlight = Style::default().bg(Color::Yellow).fg(Color::Black);

    // Lesson list panel
    let lesson_items: Vec<ListItem> = app
        .lessons
        .iter()
        .map(|path| ListItem::new(format!("📄 {}", app.lesson_name(path))))
        .collect();
    let lessons = List::new(lesson_items)
        .block(pane_block("Lessons", app.focus == Pane::Lessons))
        .highlight_style(highlight);
    f.render_stateful_widget(lessons, lists[0], &mut app.lesson_state);

    // Segment list panel
    let segment_items: Vec<ListItem> = app
        .segments
        .iter()
        .map(|segment| ListItem::new(segment.label()))
        .collect();
    let segments = List::new(segment_items)
        .block(pane_block("Segments", app.focus == Pane::Segments))
        .highlight_style(highlight);
    f.render_stateful_widget(segments, lists[1], &mut app.segment_state);

    // Rendered segment panel
    let base_dir = app.lesson_dir();
    match (&app.error, app.selected_segment()) {
        (Some(error), _) => {
            let error = Paragraph::new(Line::from(error.clone())).block(pane_block("Error", false));
            f.render_widget(error, columns[1]);
        }
        (None, Some(selected @ Segment::Layout(segment))) => {
            let block = pane_block(&selected.label(), false);
            let inner = block.inner(columns[1]);
            f.render_widget(block, columns[1]);
            render_layout_columns(
                f,
                inner,
                LayoutParts::new(segment, &app.theme, &base_dir),
            );
        }
        (None, Some(segment)) => {
            let preview = Paragraph::new(render::render_segment(segment, &app.theme, &base_dir))
                .block(pane_block(&segment.label(), false))
                .wrap(Wrap { trim: false });
            f.render_widget(preview, columns[1]);
        }
        (None, None) => {
            let preview = Paragraph::new(Line::from("Select a lesson to preview its blocks"))
                .block(pane_block("Preview", false));
            f.render_widget(preview, columns[1]);
        }
    }

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Tab: Switch pane"),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);
}
