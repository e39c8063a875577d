use crate::core::catalog::ServiceCatalog;
use crate::core::session::Session;
use crate::domain::model::NewUser;
use crate::domain::ports::Contactable;
use crate::utils::error::{PortalError, Result};
use crate::utils::monitor::SessionMonitor;
use std::io::{BufRead, Write};

const MENU: &str = "\n--- Welcome to the Service Application ---\n\
1. Register User\n\
2. Login User\n\
3. View Services\n\
4. Submit Feedback\n\
5. Update Contact Information\n\
6. Exit";

const FAREWELL: &str = "Thank you for using the application. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Login,
    ViewServices,
    SubmitFeedback,
    UpdateContact,
    Exit,
}

impl MenuChoice {
    /// 解析選單輸入；非數字或超出 1-6 都視為無效選項
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        match trimmed.parse::<u32>() {
            Ok(1) => Ok(Self::Register),
            Ok(2) => Ok(Self::Login),
            Ok(3) => Ok(Self::ViewServices),
            Ok(4) => Ok(Self::SubmitFeedback),
            Ok(5) => Ok(Self::UpdateContact),
            Ok(6) => Ok(Self::Exit),
            _ => Err(PortalError::InvalidChoice {
                input: trimmed.to_string(),
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Register => "register user",
            Self::Login => "login user",
            Self::ViewServices => "view services",
            Self::SubmitFeedback => "submit feedback",
            Self::UpdateContact => "update contact information",
            Self::Exit => "exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user picked option 6.
    Exit,
    /// Input ran out before option 6 was picked.
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopSummary {
    pub commands_handled: u64,
    pub invalid_inputs: u64,
    pub exit_reason: ExitReason,
}

/// Interactive menu over a line-oriented reader and a writer.
pub struct CommandLoop<R: BufRead, W: Write> {
    session: Session,
    catalog: ServiceCatalog,
    input: R,
    output: W,
    state: LoopState,
    exit_reason: ExitReason,
    invalid_inputs: u64,
    monitor: SessionMonitor,
}

impl<R: BufRead, W: Write> CommandLoop<R, W> {
    pub fn new(catalog: ServiceCatalog, input: R, output: W) -> Self {
        Self::new_with_monitoring(catalog, input, output, false)
    }

    pub fn new_with_monitoring(
        catalog: ServiceCatalog,
        input: R,
        output: W,
        enable_monitoring: bool,
    ) -> Self {
        Self {
            session: Session::new(),
            catalog,
            input,
            output,
            state: LoopState::Running,
            exit_reason: ExitReason::Exit,
            invalid_inputs: 0,
            monitor: SessionMonitor::new(enable_monitoring),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<LoopSummary> {
        tracing::info!(
            "🚀 Command loop started with {} services",
            self.catalog.len()
        );

        while self.state == LoopState::Running {
            self.step()?;
        }

        self.monitor.log_final_stats();
        tracing::info!("✅ Command loop terminated ({:?})", self.exit_reason);

        Ok(LoopSummary {
            commands_handled: self.monitor.commands_handled(),
            invalid_inputs: self.invalid_inputs,
            exit_reason: self.exit_reason,
        })
    }

    /// Shows the menu, reads one selection and handles it completely.
    pub fn step(&mut self) -> Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        self.say(MENU)?;
        let Some(line) = self.prompt("Choose an option: ")? else {
            self.end_of_input()?;
            return Ok(self.state);
        };

        match MenuChoice::parse(&line) {
            Ok(choice) => {
                tracing::debug!("Menu selection: {}", choice.label());
                self.dispatch(choice)?;
                if self.exit_reason != ExitReason::EndOfInput {
                    self.monitor.record_command(choice.label());
                }
            }
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                self.invalid_inputs += 1;
                self.say(&e.user_friendly_message())?;
            }
        }

        Ok(self.state)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Register => self.register_user(),
            MenuChoice::Login => self.login_user(),
            MenuChoice::ViewServices => self.view_services(),
            MenuChoice::SubmitFeedback => self.submit_feedback(),
            MenuChoice::UpdateContact => self.update_contact_info(),
            MenuChoice::Exit => {
                self.say(FAREWELL)?;
                self.terminate(ExitReason::Exit);
                Ok(())
            }
        }
    }

    fn register_user(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return self.end_of_input();
        };
        let Some(email) = self.prompt("Enter email: ")? else {
            return self.end_of_input();
        };
        let Some(phone_number) = self.prompt("Enter phone number: ")? else {
            return self.end_of_input();
        };
        let Some(address) = self.prompt("Enter address: ")? else {
            return self.end_of_input();
        };
        let Some(user_type) = self.prompt("Enter user type: ")? else {
            return self.end_of_input();
        };

        let details = NewUser {
            name,
            email,
            phone_number,
            address,
            user_type,
        };

        let info = self.session.register(details).display_info();
        self.say("User registered successfully!")?;
        self.say(&info)
    }

    fn login_user(&mut self) -> Result<()> {
        let message = match self.session.login() {
            Ok(user) => format!("User logged in successfully: {}", user.name()),
            Err(_) => "No user registered. Please register first.".to_string(),
        };
        self.say(&message)
    }

    fn view_services(&mut self) -> Result<()> {
        let rendered = self.catalog.render();
        self.say(&rendered)
    }

    fn submit_feedback(&mut self) -> Result<()> {
        if self.session.current_user().is_none() {
            return self.report(PortalError::no_active_user("submit feedback"));
        }

        let Some(feedback) = self.prompt("Enter your feedback: ")? else {
            return self.end_of_input();
        };
        match self.session.submit_feedback(&feedback) {
            Ok(receipt) => self.say(&receipt.acknowledgement()),
            Err(e) => self.report(e),
        }
    }

    fn update_contact_info(&mut self) -> Result<()> {
        if self.session.current_user().is_none() {
            return self.report(PortalError::no_active_user("update contact information"));
        }

        let Some(new_email) = self.prompt("Enter new email: ")? else {
            return self.end_of_input();
        };
        let Some(new_phone_number) = self.prompt("Enter new phone number: ")? else {
            return self.end_of_input();
        };

        let message = match self.session.update_contact(&new_email, &new_phone_number) {
            Ok(user) => format!(
                "Contact information updated: {}, {}",
                user.email(),
                user.phone_number()
            ),
            Err(e) => return self.report(e),
        };
        self.say(&message)
    }

    /// Prints a recoverable error; anything else is passed up.
    fn report(&mut self, error: PortalError) -> Result<()> {
        if !error.is_recoverable() {
            return Err(error);
        }
        tracing::warn!("⚠️ {}", error);
        self.say(&error.user_friendly_message())
    }

    fn end_of_input(&mut self) -> Result<()> {
        tracing::info!("Input closed, leaving the menu");
        self.say("")?;
        self.say(FAREWELL)?;
        self.terminate(ExitReason::EndOfInput);
        Ok(())
    }

    fn terminate(&mut self, reason: ExitReason) {
        self.state = LoopState::Terminated;
        self.exit_reason = reason;
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// 輸出提示並讀取一行；輸入結束時回傳 None
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        // 非 UTF-8 位元組以 U+FFFD 取代
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
