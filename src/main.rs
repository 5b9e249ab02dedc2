use env_logger::{Builder, Env};
use pokemon_text_adventure::session::run_default;
use pokemon_text_adventure::{StdioTerminal, TurnRng};
use std::process::ExitCode;

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let mut terminal = StdioTerminal::new();
    match run_default(&mut terminal, TurnRng::new_random()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Session ended with an error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
