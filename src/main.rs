use clap::Parser;
use dashboard_client::utils::error::ErrorSeverity;
use dashboard_client::utils::logger;
use dashboard_client::{CliArgs, ClientConfig, ClientError, HttpTransport, Project, ProjectApi};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match ClientConfig::load(args.config.as_deref()) {
        Ok(config) => args.apply_to(config),
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(exit_code(&e));
        }
    };

    let verbose = args.verbose || config.verbose();
    if args.json_log || config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }
    tracing::debug!("Client config: {:?}", config.redacted());

    if let Err(e) = run(&args, &config).await {
        tracing::error!(
            "❌ Listing projects failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}

async fn run(args: &CliArgs, config: &ClientConfig) -> dashboard_client::Result<()> {
    let parameter = args.parameter()?;
    let api = ProjectApi::new(HttpTransport::new(config)?);

    tracing::info!("Listing projects from {}", config.base_url());
    let response = api.list_projects(parameter).await?;

    if args.raw {
        println!("{}", response.text());
        return Ok(());
    }

    let projects = response
        .envelope::<Vec<Project>>()?
        .into_data()?
        .unwrap_or_default();
    tracing::info!("Fetched {} projects", projects.len());

    print_projects(&projects);
    Ok(())
}

fn print_projects(projects: &[Project]) {
    let cid_width = projects
        .iter()
        .map(|p| p.cid.len())
        .max()
        .unwrap_or(0)
        .max("CID".len());

    println!("{:<cid_width$}  {:<12}  DESCRIPTION", "CID", "STATUS");
    for project in projects {
        println!(
            "{:<cid_width$}  {:<12}  {}",
            project.cid,
            project.status().to_string(),
            project.description
        );
    }
}

fn exit_code(e: &ClientError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
