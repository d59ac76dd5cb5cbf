use photoguessr_engine::Action;

pub(crate) const HELP: &str = "\
Commands:
  <year>   submit a guess (e.g. 1913)
  <Enter>  submit the last guess, or leave the game over screen
  r        search photos again
  q        leave the game
  y / n    answer the leave prompt";

/// Maps one line typed by the player to the actions it stands for.
///
/// Returns `None` for unrecognized input. Actions that do not apply to the
/// current screen are ignored by the session.
pub(crate) fn parse_line(line: &str) -> Option<Vec<Action>> {
    let line = line.trim();
    let actions = match line.to_ascii_lowercase().as_str() {
        "" => vec![Action::DismissGameOver, Action::SubmitGuess],
        "q" | "quit" => vec![Action::OpenExitMenu],
        "y" | "yes" => vec![Action::ConfirmExit],
        "n" | "no" => vec![Action::CancelExitMenu],
        "r" | "retry" => vec![Action::StartSession],
        _ => {
            let year = line.parse().ok()?;
            vec![Action::SetGuess(year), Action::SubmitGuess]
        }
    };
    Some(actions)
}
