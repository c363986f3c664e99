use memora_games::{Completion, GameError, NBackState, SessionController};

/// What the last key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Hit,
    Miss,
    Rejected(String),
}

pub struct App<'a> {
    pub session: &'a mut SessionController,
    pub feedback: Option<Feedback>,
    pub completion: Option<Completion>,
    pub cancelled: bool,
    pub show_help: bool,
}

impl<'a> App<'a> {
    pub fn new(session: &'a mut SessionController) -> Self {
        Self {
            session,
            feedback: None,
            completion: None,
            cancelled: false,
            show_help: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.cancelled || self.completion.is_some()
    }

    pub fn state(&self) -> Option<NBackState> {
        self.session.nback().map(|g| g.state())
    }

    pub fn start(&mut self) {
        let result = self.session.start_nback();
        self.feedback = result.err().map(rejected);
    }

    pub fn restart(&mut self) {
        let result = self.session.restart_nback();
        self.feedback = result.err().map(rejected);
    }

    pub fn press(&mut self) {
        self.feedback = Some(match self.session.press_match() {
            Ok(true) => Feedback::Hit,
            Ok(false) => Feedback::Miss,
            Err(e) => rejected(e),
        });
    }

    pub fn cancel(&mut self) -> Result<(), String> {
        self.session.on_game_cancel().map_err(|e| e.to_string())?;
        self.cancelled = true;
        Ok(())
    }

    /// Advance the game to the current time.
    pub fn tick(&mut self) -> Result<(), String> {
        if let Some(completion) = self.session.poll().map_err(|e| e.to_string())? {
            self.completion = Some(completion);
        }
        Ok(())
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

fn rejected(e: GameError) -> Feedback {
    Feedback::Rejected(e.to_string())
}
