//! TUI application model (Elm architecture).

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use mortcalc_core::animation::{FrameClock, SystemClock};
use mortcalc_core::fields::{Field, FormSnapshot};
use mortcalc_core::format::NumberFormatter;
use mortcalc_core::validation::ignored_prepayment_month;
use mortcalc_orchestration::interfaces::{
    Action, ActionOutput, ActionState, LifecycleObserver, RemoteService,
};
use mortcalc_orchestration::orchestrator::{spawn_action, Outcome, RequestOrchestrator};

use crate::bridge::TuiBridgeObserver;
use crate::footer::render_footer;
use crate::form::{render_form, FormModel};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogScrollState};
use crate::messages::TuiMessage;
use crate::presenter::ResultsPresenter;
use crate::styles::ColorTheme;

const MAX_LOGS: usize = 500;
const TABLE_PAGE: usize = 10;
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const FORM_WIDTH: u16 = 44;

/// Startup options for the dashboard.
#[derive(Debug, Clone)]
pub struct TuiSettings {
    pub formatter: NumberFormatter,
    /// Directory exported schedules are written into.
    pub export_dir: PathBuf,
    /// Service address shown in the header.
    pub service_label: String,
    /// Initial form contents.
    pub form: FormSnapshot,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            formatter: NumberFormatter::default(),
            export_dir: PathBuf::from("."),
            service_label: String::new(),
            form: FormSnapshot::prefilled(),
        }
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Activity log lines.
    pub logs: Vec<String>,
    /// Log panel scroll position.
    pub log_scroll: LogScrollState,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    form: FormModel,
    presenter: ResultsPresenter,
    theme: ColorTheme,
    settings: TuiSettings,
    calculate: Arc<RequestOrchestrator>,
    export: Arc<RequestOrchestrator>,
    loading: HashSet<Action>,
    in_flight: HashSet<Action>,
    tx: Sender<TuiMessage>,
    rx: Receiver<TuiMessage>,
    outcome_tx: Sender<(Action, Outcome)>,
    outcome_rx: Receiver<(Action, Outcome)>,
    clock: Box<dyn FrameClock>,
}

impl TuiApp {
    /// Create the dashboard against `service`.
    #[must_use]
    pub fn new(service: Arc<dyn RemoteService>, settings: TuiSettings) -> Self {
        Self::with_clock(service, settings, Box::new(SystemClock))
    }

    /// Create the dashboard with an explicit frame clock.
    #[must_use]
    pub fn with_clock(
        service: Arc<dyn RemoteService>,
        settings: TuiSettings,
        clock: Box<dyn FrameClock>,
    ) -> Self {
        let (tx, rx) = unbounded();
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            should_quit: false,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            terminal_width: 80,
            terminal_height: 24,
            form: FormModel::new(settings.form.clone()),
            presenter: ResultsPresenter::new(settings.formatter),
            theme: ColorTheme::default(),
            calculate: Arc::new(RequestOrchestrator::new(
                Action::Calculate,
                Arc::clone(&service),
            )),
            export: Arc::new(RequestOrchestrator::new(Action::Export, service)),
            settings,
            loading: HashSet::new(),
            in_flight: HashSet::new(),
            tx,
            rx,
            outcome_tx,
            outcome_rx,
            clock,
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormModel {
        &self.form
    }

    #[must_use]
    pub fn presenter(&self) -> &ResultsPresenter {
        &self.presenter
    }

    /// Whether `action` shows its loading affordance.
    #[must_use]
    pub fn is_loading(&self, action: Action) -> bool {
        self.loading.contains(&action)
    }

    /// Whether a run of `action` has been started and not yet reported back.
    #[must_use]
    pub fn is_in_flight(&self, action: Action) -> bool {
        self.in_flight.contains(&action)
    }

    /// Start `action` on a worker thread with the current form contents.
    ///
    /// Ignored while the same action is loading or awaiting its outcome.
    pub fn trigger(&mut self, action: Action) {
        if self.is_loading(action) || self.is_in_flight(action) {
            tracing::debug!(%action, "trigger ignored, action in flight");
            return;
        }
        let orchestrator = match action {
            Action::Calculate => Arc::clone(&self.calculate),
            Action::Export => Arc::clone(&self.export),
        };
        let snapshot = self.form.snapshot();
        if let Some(month) = ignored_prepayment_month(&snapshot) {
            self.push_log(format!(
                "[WARN] prepayment month {month:?} is not a positive integer, not sent"
            ));
        }
        let observer: Arc<dyn LifecycleObserver> =
            Arc::new(TuiBridgeObserver::new(self.tx.clone()));
        self.in_flight.insert(action);
        spawn_action(
            orchestrator,
            snapshot,
            observer,
            self.outcome_tx.clone(),
        );
    }

    /// Drain pending messages and outcomes (Elm Update).
    ///
    /// A worker sends its lifecycle messages before its outcome, so messages
    /// are drained again after each outcome arrives to keep the log ordered.
    pub fn update(&mut self) {
        self.drain_messages();
        while let Ok((action, outcome)) = self.outcome_rx.try_recv() {
            self.drain_messages();
            self.handle_outcome(action, outcome);
        }
    }

    fn drain_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Transition { action, state } => {
                tracing::trace!(%action, ?state, "transition");
                if state == ActionState::Submitting {
                    self.push_log(format!("[INFO] {action}: sending request"));
                }
            }
            TuiMessage::Loading { action, loading } => {
                if loading {
                    self.loading.insert(action);
                } else {
                    self.loading.remove(&action);
                }
            }
            TuiMessage::KeyPress(key) => self.handle_key_action(key),
            TuiMessage::Tick => self.presenter.tick(self.clock.now()),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
        }
    }

    /// Apply the result of a finished run.
    pub fn handle_outcome(&mut self, action: Action, outcome: Outcome) {
        self.in_flight.remove(&action);
        let now = self.clock.now();
        match outcome {
            Outcome::Succeeded(ActionOutput::Calculation(result)) => {
                self.push_log(format!(
                    "[INFO] calculated {} months",
                    result.schedule.len()
                ));
                self.presenter.present(result, now);
            }
            Outcome::Succeeded(ActionOutput::Export(file)) => {
                match file.save_in(&self.settings.export_dir) {
                    Ok(path) => self.push_log(format!("[INFO] saved {}", path.display())),
                    Err(err) => {
                        tracing::warn!(error = %err, "writing export failed");
                        self.push_log(format!("[ERROR] {action}: {err}"));
                        self.presenter.show_error(action.failure_message(), now);
                    }
                }
            }
            Outcome::Failed(err) => {
                let level = if err.is_validation() { "WARN" } else { "ERROR" };
                self.push_log(format!("[{level}] {action}: {err}"));
                self.presenter.show_error(err.user_message(), now);
            }
            Outcome::Rejected => {
                self.push_log(format!("[WARN] {action} already in flight"));
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::Submit => self.trigger(Action::Calculate),
            KeyAction::Export => self.trigger(Action::Export),
            KeyAction::ToggleInstallment => self.form.toggle_installment(),
            KeyAction::Left | KeyAction::Right
                if self.form.focus() == Field::PrepaymentStrategy =>
            {
                self.form.cycle_strategy();
            }
            KeyAction::Left => self.presenter.hover_prev(),
            KeyAction::Right => self.presenter.hover_next(),
            KeyAction::Input(c) => self.form.insert_char(c),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::TablePageUp => self.presenter.scroll_table_up(TABLE_PAGE),
            KeyAction::TablePageDown => self.presenter.scroll_table_down(TABLE_PAGE),
            KeyAction::LogUp => self.log_scroll.scroll_up(),
            KeyAction::LogDown => self.log_scroll.scroll_down(self.logs.len()),
            KeyAction::None => {}
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Split the screen.
    ///
    /// Returns (header, form, logs, results, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
            .split(outer[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(12), Constraint::Min(3)])
            .split(main[0]);

        (outer[0], left[0], left[1], main[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&mut self, frame: &mut ratatui::Frame) {
        let now = self.clock.now();
        let (header, form, logs, results, footer) = Self::compute_layout(frame.area());

        let loading: Vec<Action> = [Action::Calculate, Action::Export]
            .into_iter()
            .filter(|a| self.loading.contains(a))
            .collect();
        render_header(
            frame,
            header,
            &self.settings.service_label,
            &loading,
            &self.theme,
        );
        render_form(frame, form, &self.form, &self.theme);
        render_logs(frame, logs, &self.logs, self.log_scroll.offset, &self.theme);
        self.presenter.render(frame, results, now);
        render_footer(frame, footer, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_message(TuiMessage::KeyPress(map_key(key)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            self.update();
            self.handle_message(TuiMessage::Tick);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Instant;

    use mortcalc_core::request::CalculationRequest;
    use mortcalc_core::result::{CalculationResult, ScheduleRow};
    use mortcalc_orchestration::error::ClientError;
    use mortcalc_orchestration::interfaces::ExportFile;
    use ratatui::backend::TestBackend;

    use super::*;

    struct FakeService {
        calls: AtomicUsize,
        error: Option<&'static str>,
    }

    impl FakeService {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                error: None,
            })
        }

        fn failing(message: &'static str) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                error: Some(message),
            })
        }

        fn fail(&self) -> Result<(), ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.error {
                Some(message) => Err(ClientError::Service {
                    status: 400,
                    message: message.to_string(),
                }),
                None => Ok(()),
            }
        }
    }

    impl RemoteService for FakeService {
        fn calculate(
            &self,
            _request: &CalculationRequest,
        ) -> Result<CalculationResult, ClientError> {
            self.fail()?;
            Ok(CalculationResult {
                monthly_payment: 19_335.0,
                principal: 2_400_000.0,
                total_amount_payments: 4_640_400.0,
                overpayment: 2_240_400.0,
                cash_total: 5_240_400.0,
                schedule: (1..=24)
                    .map(|m| ScheduleRow {
                        month: m,
                        payment: 19_335.0,
                        interest: 15_000.0,
                        principal: 4_335.0,
                        remaining: 2_400_000.0 - f64::from(m) * 4_335.0,
                    })
                    .collect(),
                ..CalculationResult::default()
            })
        }

        fn export(&self, _request: &CalculationRequest) -> Result<ExportFile, ClientError> {
            self.fail()?;
            Ok(ExportFile::new(b"month,payment\n1,19335\n".to_vec()))
        }
    }

    #[derive(Clone)]
    struct TestClock(Rc<Cell<Instant>>);

    impl FrameClock for TestClock {
        fn now(&self) -> Instant {
            self.0.get()
        }
    }

    fn make_app(service: Arc<FakeService>, settings: TuiSettings) -> TuiApp {
        let clock = TestClock(Rc::new(Cell::new(Instant::now())));
        TuiApp::with_clock(service, settings, Box::new(clock))
    }

    fn wait_idle(app: &mut TuiApp) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while (app.is_in_flight(Action::Calculate) || app.is_in_flight(Action::Export))
            && Instant::now() < deadline
        {
            std::thread::sleep(Duration::from_millis(5));
            app.update();
        }
        app.update();
    }

    #[test]
    fn initial_state() {
        let app = make_app(FakeService::ok(), TuiSettings::default());
        assert!(!app.should_quit);
        assert!(app.logs.is_empty());
        assert!(!app.is_loading(Action::Calculate));
        assert_eq!(app.form().value(Field::LoanAmount), "3000000");
        assert!(app.presenter().result().is_none());
    }

    #[test]
    fn submit_presents_result() {
        let service = FakeService::ok();
        let mut app = make_app(Arc::clone(&service), TuiSettings::default());
        app.handle_key_action(KeyAction::Submit);
        wait_idle(&mut app);

        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
        let result = app.presenter().result().unwrap();
        assert_eq!(result.schedule.len(), 24);
        assert!(!app.is_loading(Action::Calculate));
        assert_eq!(app.logs[0], "[INFO] calculate: sending request");
        assert_eq!(app.logs.last().unwrap(), "[INFO] calculated 24 months");
    }

    #[test]
    fn service_error_reaches_error_panel() {
        let mut app = make_app(FakeService::failing("limit exceeded"), TuiSettings::default());
        app.trigger(Action::Export);
        wait_idle(&mut app);

        assert_eq!(app.presenter().error_message(), Some("limit exceeded"));
        assert!(app.logs.last().unwrap().starts_with("[ERROR] export"));
    }

    #[test]
    fn validation_error_skips_service() {
        let service = FakeService::ok();
        let settings = TuiSettings {
            form: FormSnapshot::prefilled().with(Field::DownPayment, "3000000"),
            ..TuiSettings::default()
        };
        let mut app = make_app(Arc::clone(&service), settings);
        app.trigger(Action::Calculate);
        wait_idle(&mut app);

        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            app.presenter().error_message(),
            Some("down payment must be less than property amount")
        );
        assert!(app.logs.last().unwrap().starts_with("[WARN]"));
    }

    #[test]
    fn export_is_saved_in_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TuiSettings {
            export_dir: dir.path().to_path_buf(),
            ..TuiSettings::default()
        };
        let mut app = make_app(FakeService::ok(), settings);
        app.handle_key_action(KeyAction::Export);
        wait_idle(&mut app);

        let saved = std::fs::read(dir.path().join("mortgage_schedule.csv")).unwrap();
        assert_eq!(saved, b"month,payment\n1,19335\n");
        assert!(app.presenter().error_message().is_none());
    }

    #[test]
    fn unwritable_export_dir_shows_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        let settings = TuiSettings {
            export_dir: dir.path().join("missing"),
            ..TuiSettings::default()
        };
        let mut app = make_app(FakeService::ok(), settings);
        app.trigger(Action::Export);
        wait_idle(&mut app);

        assert_eq!(app.presenter().error_message(), Some("export failed"));
    }

    #[test]
    fn trigger_ignored_while_loading() {
        let service = FakeService::ok();
        let mut app = make_app(Arc::clone(&service), TuiSettings::default());
        app.handle_message(TuiMessage::Loading {
            action: Action::Calculate,
            loading: true,
        });
        assert!(app.is_loading(Action::Calculate));

        app.trigger(Action::Calculate);
        assert!(!app.is_in_flight(Action::Calculate));
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);

        app.handle_message(TuiMessage::Loading {
            action: Action::Calculate,
            loading: false,
        });
        assert!(!app.is_loading(Action::Calculate));
    }

    #[test]
    fn submitting_transition_is_logged() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_message(TuiMessage::Transition {
            action: Action::Export,
            state: ActionState::Validating,
        });
        assert!(app.logs.is_empty());
        app.handle_message(TuiMessage::Transition {
            action: Action::Export,
            state: ActionState::Submitting,
        });
        assert_eq!(app.logs, vec!["[INFO] export: sending request"]);
    }

    #[test]
    fn key_press_messages_reach_the_form() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_message(TuiMessage::KeyPress(KeyAction::NextField));
        assert_eq!(app.form().focus(), Field::DownPayment);
    }

    #[test]
    fn dropped_prepayment_month_is_reported() {
        let settings = TuiSettings {
            form: FormSnapshot::prefilled().with(Field::PrepaymentMonth, "0"),
            ..TuiSettings::default()
        };
        let mut app = make_app(FakeService::ok(), settings);
        app.trigger(Action::Calculate);
        wait_idle(&mut app);

        assert_eq!(
            app.logs[0],
            "[WARN] prepayment month \"0\" is not a positive integer, not sent"
        );
        assert!(app.presenter().result().is_some());
    }

    #[test]
    fn rejected_outcome_is_logged() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_outcome(Action::Calculate, Outcome::Rejected);
        assert_eq!(app.logs, vec!["[WARN] calculate already in flight"]);
    }

    #[test]
    fn arrows_cycle_strategy_when_focused() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_key_action(KeyAction::PrevField);
        assert_eq!(app.form().focus(), Field::PrepaymentStrategy);
        app.handle_key_action(KeyAction::Right);
        assert_eq!(
            app.form().snapshot().get(Field::PrepaymentStrategy),
            "reduce_payment"
        );
    }

    #[test]
    fn arrows_move_chart_hover_elsewhere() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.trigger(Action::Calculate);
        wait_idle(&mut app);

        app.handle_key_action(KeyAction::Right);
        app.handle_key_action(KeyAction::Right);
        assert_eq!(app.presenter().chart().unwrap().hover(), Some(1));
        app.handle_key_action(KeyAction::Left);
        assert_eq!(app.presenter().chart().unwrap().hover(), Some(0));
    }

    #[test]
    fn table_pages() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.trigger(Action::Calculate);
        wait_idle(&mut app);

        app.handle_key_action(KeyAction::TablePageDown);
        assert_eq!(app.presenter().table().offset(), 10);
        app.handle_key_action(KeyAction::TablePageUp);
        assert_eq!(app.presenter().table().offset(), 0);
    }

    #[test]
    fn typing_edits_focused_field() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_key_action(KeyAction::Backspace);
        app.handle_key_action(KeyAction::Input('5'));
        assert_eq!(app.form().value(Field::LoanAmount), "3000005");
        app.handle_key_action(KeyAction::ToggleInstallment);
        assert!(app.form().installment());
    }

    #[test]
    fn quit_paths() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);

        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_message(TuiMessage::KeyPress(KeyAction::Quit));
        assert!(app.should_quit);
    }

    #[test]
    fn resize_is_recorded() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        app.handle_message(TuiMessage::Resize {
            width: 160,
            height: 50,
        });
        assert_eq!((app.terminal_width, app.terminal_height), (160, 50));
    }

    #[test]
    fn log_cap_at_500() {
        let mut app = make_app(FakeService::ok(), TuiSettings::default());
        for i in 0..510 {
            app.push_log(format!("[INFO] {i}"));
        }
        assert_eq!(app.logs.len(), MAX_LOGS);
        assert_eq!(app.logs[0], "[INFO] 10");
        assert_eq!(app.log_scroll.offset, MAX_LOGS - 1);
    }

    #[test]
    fn layout_computation() {
        let (header, form, logs, results, footer) =
            TuiApp::compute_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(form.width, FORM_WIDTH);
        assert_eq!(form.height, 12);
        assert_eq!(logs.y, form.y + form.height);
        assert_eq!(results.x, FORM_WIDTH);
        assert_eq!(results.width, 120 - FORM_WIDTH);
    }

    #[test]
    fn renders_full_dashboard() {
        let mut app = make_app(
            FakeService::ok(),
            TuiSettings {
                service_label: "http://127.0.0.1:5000".to_string(),
                ..TuiSettings::default()
            },
        );
        app.trigger(Action::Calculate);
        wait_idle(&mut app);

        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let completed = terminal.draw(|frame| app.render(frame)).unwrap();
        let text: String = completed
            .buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("service: http://127.0.0.1:5000"));
        assert!(text.contains("Loan parameters"));
        assert!(text.contains("Activity"));
        assert!(text.contains("Payments by month"));
        assert!(text.contains("Esc"));
    }
}
