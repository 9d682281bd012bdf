use wg_console::config::ConsoleConfig;
use wg_console::servers;
use log::LevelFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    simple_logging::log_to_stderr(LevelFilter::Debug);
    
    let config = ConsoleConfig::from_env()?;
    let controller = servers::connect(&config);
    let table = controller.table().await?;
    let headers = table.columns
        .iter()
        .map(|column| column.label)
        .collect::<Vec<_>>();
    
    println!("{}", headers.join("\t"));
    
    for row in &table.rows {
        let cells = row.cells
            .iter()
            .map(|cell| cell.to_string())
            .collect::<Vec<_>>();
        let actions = row.actions
            .iter()
            .filter(|action| !action.disabled)
            .map(|action| action.icon.as_str())
            .collect::<Vec<_>>();
        
        println!("{}\t[{}]", cells.join("\t"), actions.join(" "));
    }
    
    Ok(())
}
