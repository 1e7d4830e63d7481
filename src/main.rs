use clap::Parser;
use pse_triage::{cli, clipboard, config, error, interactive, logging, render};
use pse_triage_common::{Evaluation, InputSet, Metadata, RuleTable, BUILTIN_TABLES, COPY_ACK_LABEL};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Classify { table, set, metadata, json, copy } => {
            let rule_table = config::resolve_table(table.table.as_deref(), table.rules.as_deref(), &config)?;
            let inputs: InputSet = set.into_iter().collect();

            for (field, value) in rule_table.unknown_selections(&inputs) {
                tracing::warn!(field, value, table = %rule_table.name, "selection not defined in rule table, treated as no match");
            }

            let meta = Metadata {
                event_name: metadata.event_name.unwrap_or_default(),
                event_location: metadata.location.unwrap_or_default(),
                event_time: metadata.time.unwrap_or_default(),
                reporter: metadata.reporter.or_else(|| config.reporter.clone()).unwrap_or_default(),
            };

            let eval = rule_table.evaluate(&inputs);
            tracing::debug!(tier = ?eval.outcome.tier, tags = eval.tags.len(), "classified");

            if json {
                let report = render::JsonReport::new(&rule_table, &inputs, &eval, &meta);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("📋 pse-triage - {}\n", rule_table.title);
                println!("{}\n", render::render_selections(&rule_table, &inputs));
                println!("{}", render::render_evaluation(&rule_table, &eval, &meta));
            }

            if copy {
                copy_result(&rule_table, &eval, &meta, json)?;
            }
        }

        Commands::Triage { table, copy } => {
            let rule_table = config::resolve_table(table.table.as_deref(), table.rules.as_deref(), &config)?;
            println!("🧯 pse-triage - {}\n", rule_table.title);

            // 1. 選択
            println!("[1/3] 請依序選擇事件條件");
            let inputs = interactive::prompt_inputs(&rule_table)?;
            println!();

            // 2. 事件情報
            let meta = if rule_table.tracks_metadata {
                println!("[2/3] 請輸入事件資訊");
                let meta = interactive::prompt_metadata(config.reporter.as_deref())?;
                println!();
                meta
            } else {
                Metadata::default()
            };

            // 3. 結果
            println!("[3/3] 判定結果");
            let eval = rule_table.evaluate(&inputs);
            println!("{}\n", render::render_evaluation(&rule_table, &eval, &meta));

            if copy || interactive::confirm_copy(config.copy_by_default)? {
                copy_result(&rule_table, &eval, &meta, false)?;
            }
        }

        Commands::Tables { dump } => {
            if let Some(name) = dump {
                let rule_table = RuleTable::load_builtin(&name)?;
                println!("{}", rule_table.to_json_pretty()?);
            } else {
                for name in BUILTIN_TABLES {
                    let rule_table = RuleTable::load_builtin(name)?;
                    let marker = if name == config.default_table { " (預設)" } else { "" };
                    println!("{}{} - {}", name, marker, rule_table.title);
                    println!("  {}", rule_table.description);
                    for field in &rule_table.fields {
                        let options: Vec<&str> = field.options.iter().map(|o| o.value.as_str()).collect();
                        println!("    {} ({}): {}", field.name, field.label, options.join(" / "));
                    }
                    println!();
                }
            }
        }

        Commands::Config { set_table, set_reporter, set_copy, show } => {
            let mut config = config;
            let changed = set_table.is_some() || set_reporter.is_some() || set_copy.is_some();

            if let Some(name) = set_table {
                config.set_default_table(&name)?;
                println!("✔ 預設判定表: {}", config.default_table);
            }

            if let Some(reporter) = set_reporter {
                config.set_reporter(reporter);
                println!("✔ 預設通報人: {}", config.reporter.as_deref().unwrap_or("（未設定）"));
            }

            if let Some(copy) = set_copy {
                config.copy_by_default = copy;
                println!("✔ 預設複製: {}", copy);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  路徑: {}", Config::config_path()?.display());
                println!("  預設判定表: {}", config.default_table);
                println!("  預設通報人: {}", config.reporter.as_deref().unwrap_or("（未設定）"));
                println!("  預設複製: {}", config.copy_by_default);
            }
        }
    }

    Ok(())
}

/// 判定結果をクリップボードへ複製
fn copy_result(table: &RuleTable, eval: &Evaluation, meta: &Metadata, json: bool) -> Result<()> {
    let mut out = clipboard::fallback_output(json);
    match clipboard::copy_evaluation(&mut clipboard::SystemClipboard, table, eval, meta, &mut out)? {
        clipboard::CopyOutcome::Copied => eprintln!("{}", COPY_ACK_LABEL),
        clipboard::CopyOutcome::Fallback => eprintln!("✔ 剪貼簿無法使用，已輸出判定結果"),
    }
    Ok(())
}
