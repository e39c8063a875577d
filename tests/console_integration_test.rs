use civic_portal::core::Contactable;
use civic_portal::{CommandLoop, ExitReason, LoopState, ServiceCatalog};
use std::io::Cursor;

fn console_for(script: &str) -> CommandLoop<Cursor<String>, Vec<u8>> {
    CommandLoop::new(ServiceCatalog::demo(), Cursor::new(script.to_string()), Vec::new())
}

/// 完整流程：登入失敗、註冊、登入、更新聯絡資訊、檢視服務、離開
#[test]
fn test_end_to_end_session() {
    let script = "2\n\
1\nAlice\na@x.com\n555\n1 Main St\ncitizen\n\
2\n\
5\na2@x.com\n556\n\
3\n\
6\n";
    let mut console = console_for(script);
    let summary = console.run().unwrap();

    assert_eq!(summary.exit_reason, ExitReason::Exit);
    assert_eq!(summary.commands_handled, 6);
    assert_eq!(summary.invalid_inputs, 0);
    assert_eq!(console.state(), LoopState::Terminated);

    let user = console.session().current_user().unwrap();
    assert_eq!(user.id().value(), 1);
    assert_eq!(user.name(), "Alice");
    assert_eq!(user.email(), "a2@x.com");
    assert_eq!(user.phone_number(), "556");
    assert_eq!(user.address(), "1 Main St");
    assert_eq!(user.user_type(), "citizen");

    let output = String::from_utf8(console.into_output()).unwrap();

    let no_user = output.find("No user registered. Please register first.").unwrap();
    let registered = output.find("User registered successfully!").unwrap();
    let logged_in = output.find("User logged in successfully: Alice").unwrap();
    let updated = output.find("Contact information updated: a2@x.com, 556").unwrap();
    let services = output.find("Available Services:").unwrap();
    let farewell = output.find("Thank you for using the application. Goodbye!").unwrap();
    assert!(no_user < registered);
    assert!(registered < logged_in);
    assert!(logged_in < updated);
    assert!(updated < services);
    assert!(services < farewell);

    assert!(output.contains("User ID: 1, Name: Alice, Email: a@x.com, Phone: 555"));
    assert!(output.contains("Service ID: 1\nService Name: Birth Certificate"));
    assert!(output.contains("Fee: 50.0"));
    assert!(output.contains("Service ID: 2\nService Name: Residence Certificate"));
    assert!(output.contains("Fee: 200.0"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_reregistration_replaces_current_user() {
    let script = "1\nAlice\na@x.com\n555\n1 Main St\ncitizen\n\
1\nBob\nb@x.com\n777\n2 High St\nresident\n\
2\n4\nhello\n6\n";
    let mut console = console_for(script);
    console.run().unwrap();

    let user = console.session().current_user().unwrap();
    assert_eq!(user.name(), "Bob");
    assert_eq!(user.id().value(), 2);
    assert_eq!(console.session().issued_ids(), 2);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("User ID: 2, Name: Bob"));
    assert!(output.contains("User logged in successfully: Bob"));
    assert!(output.contains("Feedback submitted by User ID: 2 - hello"));
}

#[test]
fn test_guarded_commands_leave_state_untouched() {
    let mut console = console_for("5\n4\nnot-a-number\n42\n6\n");
    let summary = console.run().unwrap();

    assert!(console.session().current_user().is_none());
    assert_eq!(console.session().issued_ids(), 0);
    assert_eq!(summary.invalid_inputs, 2);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Please register or log in to update contact information."));
    assert!(output.contains("Please register or log in to submit feedback."));
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
}

#[test]
fn test_services_visible_without_login() {
    let mut console = console_for("3\n6\n");
    console.run().unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Required Documents: ID Proof"));
    assert!(output.contains("Required Documents: Application Form, ID Proof"));
}

#[test]
fn test_closed_input_ends_session() {
    let mut console = console_for("1\nAlice\n");
    let summary = console.run().unwrap();

    assert_eq!(summary.exit_reason, ExitReason::EndOfInput);
    assert!(console.session().current_user().is_none());
}
