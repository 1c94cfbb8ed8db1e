use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::domain::ChatMessage;
use crate::views::ChatSession;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "chat",
            "Ask the assistant a question, show the conversation, or clear it",
            "chat [clear|message…]",
            cmd_chat,
        ),
        CommandEntry::new(
            "suggest",
            "List suggested questions, or ask one by number",
            "suggest [number]",
            cmd_suggest,
        ),
    ]
}

fn print_message(message: &ChatMessage) {
    let speaker = if message.is_user { "You" } else { "Assistant" };
    output::info(format!(
        "[{}] {speaker}: {}",
        message.timestamp.format("%H:%M"),
        message.text
    ));
}

fn ask(context: &mut ShellContext, text: &str) -> CommandResult {
    let client = &context.client;
    if let Some(reply) = context.chat.send(client, text) {
        print_message(reply);
    }
    Ok(())
}

fn cmd_chat(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let [action] = args {
        if action.eq_ignore_ascii_case("clear") {
            context.chat.clear();
            output::info("Conversation cleared.");
            return Ok(());
        }
    }

    let text = args.join(" ");
    if !text.trim().is_empty() {
        return ask(context, &text);
    }

    output::section("Chat");
    if context.chat.messages().is_empty() {
        output::info("No messages yet. Try `chat <question>` or `suggest`.");
    }
    for message in context.chat.messages() {
        print_message(message);
    }
    Ok(())
}

fn cmd_suggest(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let questions = ChatSession::suggested_questions();
    match args.first() {
        None => {
            output::section("Suggested questions");
            for (idx, question) in questions.iter().enumerate() {
                output::info(format!("  {}. {question}", idx + 1));
            }
            output::hint("Use `suggest <number>` to ask one.");
            Ok(())
        }
        Some(raw) => {
            let question = raw
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .and_then(|idx| questions.get(idx))
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "Pick a number between 1 and {}.",
                        questions.len()
                    ))
                })?;
            output::info(format!("You: {question}"));
            ask(context, question)
        }
    }
}
