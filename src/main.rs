mod cli;

use std::time::Instant;

use log::debug;
use zodiac_extract::{json, logger, Form, Registry, SystemClipboard};

/// Print the form's banner, if any, and return the failure exit code.
fn report(form: &Form, now: Instant) -> i32 {
    if let Some(message) = form.banner(now) {
        eprintln!("{}", message);
    }
    1
}

fn read_input(file: Option<&std::path::Path>) -> Result<String, i32> {
    json::read_input(file).map_err(|e| {
        match file {
            Some(path) => eprintln!("Failed to read {}: {}", path.display(), e),
            None => eprintln!("Failed to read stdin: {}", e),
        }
        1
    })
}

fn run_extract_mode(args: &cli::ExtractArgs) -> i32 {
    let mut form = Form::new(Registry::builtin());
    let mut clipboard = SystemClipboard;
    let now = Instant::now();

    if args.paste {
        debug!("Reading input from clipboard");
        if !form.paste_input(&mut clipboard, now) {
            return report(&form, now);
        }
    } else {
        match read_input(args.file.as_deref()) {
            Ok(text) => form.set_input(text),
            Err(code) => return code,
        }
    }
    debug!("Input: {} bytes", form.input().len());

    form.select_reward(Some(args.reward.as_str()));
    form.select_animal(args.animal.as_deref());
    if args.animal.is_some() && !form.animal_selector_visible() {
        eprintln!("Note: --animal is ignored for {}", args.reward);
    }

    if !form.submit(now) {
        return report(&form, now);
    }
    if let Some(output) = form.output() {
        println!("{}", output);
    }

    if args.copy {
        if !form.copy_output(&mut clipboard, now) {
            return report(&form, now);
        }
        eprintln!("Copied!");
    }
    0
}

fn run_rewards_mode() -> i32 {
    for config in Registry::builtin().iter() {
        println!(
            "{:<14} {:<13} {}",
            config.key,
            config.reward_type,
            config.describe_requirement()
        );
    }
    0
}

fn run_copy_input_mode(file: Option<&std::path::Path>) -> i32 {
    let mut form = Form::new(Registry::builtin());
    let now = Instant::now();

    match read_input(file) {
        Ok(text) => form.set_input(text),
        Err(code) => return code,
    }
    if !form.copy_input(&mut SystemClipboard, now) {
        return report(&form, now);
    }
    eprintln!("Copied!");
    0
}

fn run_paste_mode() -> i32 {
    let mut form = Form::new(Registry::builtin());
    let now = Instant::now();

    if !form.paste_input(&mut SystemClipboard, now) {
        return report(&form, now);
    }
    print!("{}", form.input());
    0
}

fn main() {
    let args = cli::parse_args();
    logger::init(args.debug);
    debug!("Mode: {:?}", args.mode);

    let exit_code = match &args.mode {
        cli::Mode::Extract(extract) => run_extract_mode(extract),
        cli::Mode::Rewards => run_rewards_mode(),
        cli::Mode::CopyInput { file } => run_copy_input_mode(file.as_deref()),
        cli::Mode::Paste => run_paste_mode(),
    };

    log::logger().flush();
    std::process::exit(exit_code);
}
