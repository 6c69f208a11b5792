use anyhow::{anyhow, Context, Result};
use recipe_wizard::api_connection::endpoints::Provider;
use recipe_wizard::cli::{parse_args, Command, ModelArgs};
use recipe_wizard::config::AppConfig;
use recipe_wizard::conversion::{
    describe_conversion, parse_quantity, selectable_units, write_ingredient_table, ConversionRequest,
};
use recipe_wizard::recipe_annotator::{annotate_recipe, annotate_recipe_file};
use recipe_wizard::recipe_generator::generate_annotated_recipe;
use recipe_wizard::session::RecipeSession;
use tokio::io::{self, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Results go to stdout, so logs stay on stderr
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli_args = parse_args();
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    match cli_args.command {
        Command::Generate { dish, temperature, model } => {
            let config = apply_overrides(config, model, temperature);
            let dish = dish.join(" ");
            let recipe =
                generate_annotated_recipe(&config.provider(), &dish, config.kitchen_temperature_c).await;
            println!("{}", recipe);
        }
        Command::Annotate { file, temperature } => {
            let config = config.with_overrides(None, None, temperature);
            let annotated = match file {
                Some(path) => annotate_recipe_file(&path, config.kitchen_temperature_c).await?,
                None => annotate_recipe(&read_stdin().await?, config.kitchen_temperature_c),
            };
            println!("{}", annotated);
        }
        Command::Convert { quantity, unit, ingredient, temperature } => {
            let config = config.with_overrides(None, None, temperature);
            let quantity = parse_quantity(&quantity)
                .with_context(|| format!("Invalid quantity '{}'", quantity))?;
            let request =
                ConversionRequest::new(quantity, unit, ingredient.join(" "), config.kitchen_temperature_c)?;
            let grams = request.convert();
            let message = describe_conversion(&request, grams);
            if grams.is_none() {
                return Err(anyhow!(message));
            }
            println!("{}", message);
        }
        Command::Ingredients => {
            write_ingredient_table(std::io::stdout().lock())?;
        }
        Command::Units => {
            for unit in selectable_units() {
                println!("{}", unit);
            }
        }
        Command::Chat { temperature, model } => {
            let config = apply_overrides(config, model, temperature);
            run_chat(&config.provider(), config.kitchen_temperature_c).await?;
        }
    }

    Ok(())
}

fn apply_overrides(config: AppConfig, model: ModelArgs, temperature: Option<f64>) -> AppConfig {
    config.with_overrides(model.ollama_url, model.model, temperature)
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read recipe text from stdin")?;
    Ok(text)
}

const CHAT_HELP: &str = "Type a dish to generate a recipe, or one of:
  :history      show the conversation so far
  :saved        list saved recipes
  :show <key>   print a saved recipe
  :quit         leave";

async fn run_chat(provider: &Provider, temperature_c: f64) -> Result<()> {
    let mut session = RecipeSession::new();
    let mut stdout = io::stdout();
    let mut lines = BufReader::new(io::stdin()).lines();

    stdout.write_all(format!("{}\n", CHAT_HELP).as_bytes()).await?;
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let output = match input.split_once(' ').unwrap_or((input, "")) {
            (":quit", _) => break,
            (":history", _) => session
                .history()
                .iter()
                .map(|message| format!("[{}] {}", message.role, message.content))
                .collect::<Vec<_>>()
                .join("\n\n"),
            (":saved", _) if session.is_empty() => "No saved recipes yet.".to_string(),
            (":saved", _) => session
                .saved_recipes()
                .iter()
                .map(|saved| format!("{}  {}", saved.key, saved.name))
                .collect::<Vec<_>>()
                .join("\n"),
            (":show", key) => match session.saved_recipe(key.trim()) {
                Some(saved) => saved.recipe.clone(),
                None => format!("No saved recipe '{}'.", key.trim()),
            },
            (command, _) if command.starts_with(':') => CHAT_HELP.to_string(),
            _ => {
                let recipe = generate_annotated_recipe(provider, input, temperature_c).await;
                let key = session.record_recipe(input, &recipe);
                info!(%key, dish = input, "saved recipe");
                recipe
            }
        };
        stdout.write_all(format!("{}\n", output).as_bytes()).await?;
    }

    stdout.flush().await?;
    Ok(())
}
