use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);
    let Some(path) = args.next() else {
        println!("Usage: toml2json tomlfile");
        return ExitCode::from(1);
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => {
            eprintln!("Error: File not found");
            return ExitCode::from(2);
        }
    };

    match toml2json::parse(&text) {
        Ok(doc) => {
            println!("{}", toml2json::to_json(&doc, 0, true));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}
