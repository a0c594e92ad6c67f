//zcomplete/src/main.rs
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::{env, fs, io};

use zcomplete::kernel::services::adapters::{get_config_path, load_config};
use zcomplete::kernel::services::ports::CompletionConfig;
use zcomplete::replay::{run_script, ReplayScript};

mod logging;

fn read_script(arg: &str) -> io::Result<String> {
    if arg == "-" {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        Ok(data)
    } else {
        fs::read_to_string(arg)
    }
}

fn run(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    let script: ReplayScript = serde_json::from_str(&read_script(arg)?)?;

    // 配置只加载一次，之后按引用传给控制器
    let config = match script.config.as_deref().map(Path::to_path_buf).or_else(get_config_path) {
        Some(path) => load_config(&path),
        None => CompletionConfig::default(),
    };

    let report = run_script(script, Arc::new(config));
    Ok(serde_json::to_string_pretty(&report)?)
}

fn main() -> ExitCode {
    let guard = logging::init();

    let args: Vec<String> = env::args().collect();
    let Some(arg) = args.get(1) else {
        eprintln!("usage: zcomplete <script.json | ->");
        return ExitCode::from(2);
    };

    let code = match run(arg) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(script = %arg, error = %err, "replay failed");
            eprintln!("zcomplete: {err}");
            if let Some(guard) = guard.as_ref() {
                eprintln!("logs: {}", guard.log_dir().display());
            }
            ExitCode::FAILURE
        }
    };
    drop(guard);
    code
}
