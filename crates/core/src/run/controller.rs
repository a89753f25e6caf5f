use std::collections::VecDeque;
use std::mem;

use tracing::{debug, info, warn};

use super::judge::{TestOutcome, judge};
use super::state::{Command, Controls, RunState};
use crate::anim::{AnimationBridge, Completion};
use crate::common::{ControlError, EditError, StepFault};
use crate::config::Config;
use crate::editor::Editor;
use crate::interp::Interpreter;
use crate::level::{self, Decoded, Level, TestCase};
use crate::program::Program;
use crate::stats::RunStats;

/// Cursor into the test-case list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrentTest {
    /// The case being run, once a case has started.
    pub test: Option<TestCase>,
    /// Its index; `0` whenever the controller is stopped.
    pub index: usize,
}

/// What one call to [`Controller::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Nothing is queued and no animation is awaited.
    Idle,
    /// A task or a continuation ran.
    Ran,
    /// The awaited animation has not completed yet.
    Waiting,
    /// The run is paused; the next step stays queued.
    Parked,
}

/// Something observable that happened inside the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerEvent {
    /// Play started a run over `cases` cases.
    RunStarted {
        /// Number of cases in the run.
        cases: usize,
    },
    /// A case got a fresh interpreter.
    CaseStarted {
        /// Index of the case.
        index: usize,
    },
    /// A case was judged.
    CaseFinished(TestOutcome),
    /// The run ended on its own.
    RunFinished {
        /// Every judged case passed.
        passed: bool,
        /// Cases judged in this run.
        judged: usize,
    },
    /// Stop was issued.
    Stopped,
    /// A level string replaced the program.
    LevelLoaded {
        /// Title of the level; `None` for legacy strings.
        title: Option<String>,
    },
    /// A level string was rejected.
    LoadFailed {
        /// The decode error, formatted.
        reason: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Task {
    Step,
    StartCase,
}

/// The run-loop controller.
///
/// Owns the program, the test cases, the interpreter of the current case and
/// the run state. All progress happens in [`Controller::tick`]: one queued
/// task, or the continuation of one finished animation, per call.
#[derive(Debug)]
pub struct Controller<I, A, E> {
    config: Config,
    bridge: A,
    editor: E,
    program: Option<Program>,
    title: Option<String>,
    test_cases: Vec<TestCase>,
    state: RunState,
    current: CurrentTest,
    interpreter: Option<I>,
    fault: Option<StepFault>,
    tasks: VecDeque<Task>,
    awaiting: Option<Completion>,
    outcomes: Vec<TestOutcome>,
    events: Vec<ControllerEvent>,
    stats: RunStats,
}

impl<I, A, E> Controller<I, A, E>
where
    I: Interpreter + Default,
    A: AnimationBridge,
    E: Editor,
{
    /// Builds a stopped controller and loads `config.initial_level` if set.
    ///
    /// Without a usable boot level the program is an empty grid of
    /// `config.run.default_cols` x `config.run.default_rows`, so play and
    /// share work straight away. A boot level that fails to decode is logged.
    pub fn new(config: Config, bridge: A, mut editor: E) -> Self {
        editor.enable();
        let initial = config.initial_level.clone();
        let mut controller = Self {
            config,
            bridge,
            editor,
            program: None,
            title: None,
            test_cases: Vec::new(),
            state: RunState::Stopped,
            current: CurrentTest::default(),
            interpreter: None,
            fault: None,
            tasks: VecDeque::new(),
            awaiting: None,
            outcomes: Vec::new(),
            events: Vec::new(),
            stats: RunStats::default(),
        };
        if let Some(text) = initial {
            if let Err(error) = controller.load(&text) {
                warn!(%error, "initial level ignored");
            }
        }
        if controller.program.is_none() {
            let run = &controller.config.run;
            match Program::new(run.default_cols, run.default_rows) {
                Ok(program) => {
                    controller.program = Some(program);
                    controller.redraw();
                }
                Err(error) => warn!(%error, "no default program"),
            }
        }
        controller
    }

    /// Starts a run from Stopped, or resumes from Paused.
    ///
    /// # Errors
    ///
    /// [`ControlError::Disabled`] while running, [`ControlError::NoProgram`]
    /// when there is nothing to run.
    pub fn play(&mut self) -> Result<(), ControlError> {
        match self.state {
            RunState::Running => Err(self.disabled(Command::Play)),
            RunState::Paused => {
                self.state = RunState::Running;
                info!(case = self.current.index, "run resumed");
                Ok(())
            }
            RunState::Stopped => {
                if self.program.is_none() {
                    return Err(ControlError::NoProgram);
                }
                self.editor.disable();
                if self.test_cases.is_empty() {
                    self.test_cases.push(TestCase::default_case());
                }
                self.outcomes.clear();
                self.state = RunState::Running;
                info!(cases = self.test_cases.len(), "run started");
                self.events.push(ControllerEvent::RunStarted {
                    cases: self.test_cases.len(),
                });
                self.start_case();
                Ok(())
            }
        }
    }

    /// Suspends step issuance. The current interpreter and tape are kept and
    /// an animation in flight is allowed to finish.
    ///
    /// # Errors
    ///
    /// [`ControlError::Disabled`] unless running.
    pub fn pause(&mut self) -> Result<(), ControlError> {
        if self.state != RunState::Running {
            return Err(self.disabled(Command::Pause));
        }
        self.state = RunState::Paused;
        info!(case = self.current.index, "run paused");
        Ok(())
    }

    /// Abandons the run from any state.
    ///
    /// The interpreter, its tape, queued tasks and the awaited animation are
    /// dropped, the editor is enabled and the cursor returns to `0`.
    pub fn stop(&mut self) {
        if self.state.is_active() {
            info!(case = self.current.index, "run stopped");
        }
        self.halt();
        self.events.push(ControllerEvent::Stopped);
    }

    /// Runs one unit of work.
    pub fn tick(&mut self) -> Tick {
        if let Some(done) = &self.awaiting {
            if !done.is_resolved() {
                return Tick::Waiting;
            }
            self.awaiting = None;
            self.judge_and_continue();
            return Tick::Ran;
        }
        let Some(task) = self.tasks.pop_front() else {
            return Tick::Idle;
        };
        match (self.state, task) {
            (RunState::Stopped, _) => debug!(?task, "stale task dropped"),
            (RunState::Paused, Task::Step) => {
                self.tasks.push_front(Task::Step);
                return Tick::Parked;
            }
            (_, Task::StartCase) => self.start_case(),
            (RunState::Running, Task::Step) => self.step_once(),
        }
        Tick::Ran
    }

    /// Ticks until the controller is idle, waiting on an animation, or parked.
    ///
    /// A program that never halts and has no step limit keeps this looping;
    /// use [`Controller::drain_at_most`] when that can happen.
    pub fn drain(&mut self) -> Tick {
        loop {
            let tick = self.tick();
            if tick != Tick::Ran {
                return tick;
            }
        }
    }

    /// Like [`Controller::drain`] but gives up after `budget` ticks,
    /// returning [`Tick::Ran`] if work remains.
    pub fn drain_at_most(&mut self, budget: usize) -> Tick {
        for _ in 0..budget {
            let tick = self.tick();
            if tick != Tick::Ran {
                return tick;
            }
        }
        Tick::Ran
    }

    /// Replaces the program from a level string or share link.
    ///
    /// JSON levels replace the test cases as well; legacy strings only carry
    /// a program and keep the current cases.
    ///
    /// # Errors
    ///
    /// [`ControlError::Disabled`] unless stopped, [`ControlError::Decode`]
    /// when the string does not decode. Nothing changes on error.
    pub fn load(&mut self, text: &str) -> Result<(), ControlError> {
        if self.state.is_active() {
            return Err(self.disabled(Command::Load));
        }
        let decoded = match level::unwrap_link(text).and_then(|s| level::decode(&s)) {
            Ok(decoded) => decoded,
            Err(error) => {
                warn!(%error, "level rejected");
                self.events.push(ControllerEvent::LoadFailed {
                    reason: error.to_string(),
                });
                return Err(error.into());
            }
        };
        let title = match decoded {
            Decoded::Level(level) => {
                self.test_cases = level.test_cases;
                self.program = Some(level.program);
                Some(level.title)
            }
            Decoded::Program(program) => {
                self.program = Some(program);
                None
            }
        };
        if title.is_some() {
            self.title.clone_from(&title);
        }
        info!(
            title = title.as_deref().unwrap_or("<legacy>"),
            cases = self.test_cases.len(),
            "level loaded"
        );
        self.redraw();
        self.events.push(ControllerEvent::LevelLoaded { title });
        Ok(())
    }

    /// Share link for the current program and cases, titled from config.
    ///
    /// # Errors
    ///
    /// [`ControlError::EmptyShare`] when no program is loaded.
    pub fn share(&self) -> Result<String, ControlError> {
        let program = self.program.as_ref().ok_or(ControlError::EmptyShare)?;
        let level = Level {
            title: self.config.share.title.clone(),
            test_cases: self.test_cases.clone(),
            program: program.clone(),
        };
        Ok(level::share_link(&self.config.share.base_url, &level))
    }

    /// Replaces the program with an empty `cols` x `rows` grid.
    ///
    /// # Errors
    ///
    /// [`ControlError::Busy`] unless stopped, [`ControlError::Edit`] for bad
    /// dimensions.
    pub fn new_program(&mut self, cols: u32, rows: u32) -> Result<(), ControlError> {
        self.ensure_stopped()?;
        self.program = Some(Program::new(cols, rows)?);
        self.redraw();
        Ok(())
    }

    /// Applies an edit to the program.
    ///
    /// # Errors
    ///
    /// [`ControlError::Busy`] unless stopped, [`ControlError::NoProgram`]
    /// without a program, [`ControlError::Edit`] if `f` rejects the edit.
    pub fn edit<T, F>(&mut self, f: F) -> Result<T, ControlError>
    where
        F: FnOnce(&mut Program) -> Result<T, EditError>,
    {
        self.ensure_stopped()?;
        let program = self.program.as_mut().ok_or(ControlError::NoProgram)?;
        let value = f(program)?;
        self.redraw();
        Ok(value)
    }

    /// Replaces the test cases.
    ///
    /// # Errors
    ///
    /// [`ControlError::Busy`] unless stopped.
    pub fn set_test_cases(&mut self, test_cases: Vec<TestCase>) -> Result<(), ControlError> {
        self.ensure_stopped()?;
        self.test_cases = test_cases;
        Ok(())
    }

    /// Current run state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Controls a front end should enable now.
    pub const fn controls(&self) -> Controls {
        self.state.controls()
    }

    /// The test-case cursor.
    pub const fn current(&self) -> &CurrentTest {
        &self.current
    }

    /// The loaded program.
    pub const fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    /// Title of the last JSON level loaded.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The test cases run by play.
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Outcomes of the current or last run, in order.
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// The interpreter of the case in progress.
    pub const fn interpreter(&self) -> Option<&I> {
        self.interpreter.as_ref()
    }

    /// Counters since construction.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// The configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The animation bridge.
    pub const fn bridge(&self) -> &A {
        &self.bridge
    }

    /// The animation bridge, mutably; hosts use it to advance their clock.
    pub const fn bridge_mut(&mut self) -> &mut A {
        &mut self.bridge
    }

    /// The editor.
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Takes every event published since the last call.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        mem::take(&mut self.events)
    }

    fn disabled(&self, command: Command) -> ControlError {
        ControlError::Disabled {
            command,
            state: self.state,
        }
    }

    fn ensure_stopped(&self) -> Result<(), ControlError> {
        if self.state.is_active() {
            Err(ControlError::Busy)
        } else {
            Ok(())
        }
    }

    fn redraw(&mut self) {
        if let Some(program) = &self.program {
            self.bridge.redraw(program);
        }
    }

    fn halt(&mut self) {
        self.state = RunState::Stopped;
        self.interpreter = None;
        self.fault = None;
        self.tasks.clear();
        self.awaiting = None;
        self.current = CurrentTest::default();
        self.editor.enable();
    }

    /// Builds a fresh interpreter for the case under the cursor.
    fn start_case(&mut self) {
        let index = self.current.index;
        let (Some(program), Some(test)) = (&self.program, self.test_cases.get(index)) else {
            self.halt();
            return;
        };
        let test = test.clone();
        let mut interpreter = I::default();
        interpreter.set_program(program);
        interpreter.set_tape(test.input.clone());
        interpreter.set_limit(test.limit);
        let started = interpreter.start();

        self.stats.cases_started += 1;
        self.fault = None;
        self.current.test = Some(test);
        debug!(case = index, "case started");
        self.events.push(ControllerEvent::CaseStarted { index });

        let position = interpreter.position();
        let fill = self.config.style.fill_for(interpreter.tape().head());
        self.interpreter = Some(interpreter);
        match started {
            Ok(()) => {
                let transform = self.bridge.cell_transform(position);
                self.bridge.place_token(transform, fill);
                self.tasks.push_back(Task::Step);
            }
            Err(fault) => {
                warn!(case = index, %fault, "interpreter failed to start");
                self.stats.faults += 1;
                self.fault = Some(fault);
                self.judge_and_continue();
            }
        }
    }

    /// One coordinated step: snap the token, step, animate to the new cell.
    fn step_once(&mut self) {
        let Some(interpreter) = self.interpreter.as_mut() else {
            return;
        };
        let from = interpreter.position();
        let fill = self.config.style.fill_for(interpreter.tape().head());
        let transform = self.bridge.cell_transform(from);
        self.bridge.place_token(transform, fill);

        self.stats.steps += 1;
        if let Err(fault) = interpreter.step() {
            warn!(case = self.current.index, %fault, "interpreter fault");
            self.stats.faults += 1;
            self.fault = Some(fault);
            self.judge_and_continue();
            return;
        }

        let to = interpreter.position();
        let fill = self.config.style.fill_for(interpreter.tape().head());
        debug!(%from, %to, tape = %interpreter.tape(), "step");
        let done = Completion::new();
        self.awaiting = Some(done.clone());
        self.stats.animations += 1;
        let transform = self.bridge.cell_transform(to);
        self.bridge
            .animate_token(transform, fill, self.config.run.step_duration(), done);
    }

    /// Queues the next step, or judges the finished case and advances or stops.
    fn judge_and_continue(&mut self) {
        let (Some(interpreter), Some(test)) = (&self.interpreter, &self.current.test) else {
            return;
        };
        if self.fault.is_none() && interpreter.running() {
            self.tasks.push_back(Task::Step);
            return;
        }

        let index = self.current.index;
        let accept = self.fault.is_none() && interpreter.accept();
        let verdict = judge(test, accept, interpreter.tape());
        let outcome = TestOutcome {
            index,
            verdict,
            accept,
            steps: interpreter.steps(),
            fault: self.fault.as_ref().map(ToString::to_string),
            tape: interpreter.tape().to_string(),
        };
        if verdict.passed {
            self.stats.cases_passed += 1;
            info!(case = index, steps = outcome.steps, "case passed");
        } else {
            self.stats.cases_failed += 1;
            info!(
                case = index,
                accept,
                expected = test.accept,
                tape = %outcome.tape,
                "case failed"
            );
        }
        self.outcomes.push(outcome.clone());
        self.events.push(ControllerEvent::CaseFinished(outcome));

        if verdict.passed && index + 1 < self.test_cases.len() {
            self.interpreter = None;
            self.current.index = index + 1;
            self.tasks.push_back(Task::StartCase);
            return;
        }

        let judged = self.outcomes.len();
        info!(passed = verdict.passed, judged, "run finished");
        self.events.push(ControllerEvent::RunFinished {
            passed: verdict.passed,
            judged,
        });
        self.halt();
    }
}
