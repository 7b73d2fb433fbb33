use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use catalog_browser::command::HELP;
use catalog_browser::render::render;
use catalog_browser::{BrowserCommand, BrowserConfig, CatalogBrowser, Debouncer, parse_command};
use catalog_filters::FilterAction;
use catalog_products::ProductCatalog;

const SAMPLE_ITEMS: &str = include_str!("../data/items.json");

fn load_catalog() -> anyhow::Result<ProductCatalog> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CATALOG_ITEMS").ok());

    match path {
        Some(path) => ProductCatalog::load(&path).with_context(|| format!("loading {path}")),
        None => {
            tracing::info!("no catalog path given; using bundled sample items");
            ProductCatalog::from_json_str(SAMPLE_ITEMS).context("parsing bundled sample items")
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let catalog = load_catalog()?;
    let config = BrowserConfig::default();
    let mut browser = CatalogBrowser::new(catalog, config);

    // Debounced searches come back through this channel so the browser keeps
    // a single owner and actions stay in dispatch order.
    let (tx, mut debounced) = mpsc::unbounded_channel::<FilterAction>();
    let mut search_debouncer = Debouncer::new(config.search_debounce(), move |text: String| {
        let _ = tx.send(FilterAction::SetSearch(text));
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}\n");
    print!("{}", render(&browser.view()));

    loop {
        tokio::select! {
            Some(action) = debounced.recv() => {
                browser.dispatch(action);
                print!("{}", render(&browser.view()));
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };

                match parse_command(&line) {
                    Ok(BrowserCommand::Quit) => break,
                    Ok(BrowserCommand::Help) => println!("{HELP}"),
                    Ok(BrowserCommand::Type(text)) => search_debouncer.call(text),
                    Ok(BrowserCommand::EditPrice(bound, raw)) => {
                        browser.edit_price(bound, &raw);
                        println!(
                            "price draft: {:?} - {:?}",
                            browser.price_draft().min(),
                            browser.price_draft().max()
                        );
                    }
                    Ok(command) => {
                        command.apply(&mut browser);
                        print!("{}", render(&browser.view()));
                    }
                    Err(e) => {
                        tracing::warn!(input = %line, error = %e, "ignoring command");
                        println!("{e} (try `help`)");
                    }
                }
            }
        }
    }

    search_debouncer.cancel();
    Ok(())
}
