// src/cli.rs
//
// Command-line front end. Same store file, same handlers as the popup; the
// storage service runs in-process instead of on a worker thread.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, Result, WrapErr};

use crate::badge;
use crate::cart::{line_total, Cart};
use crate::config::{
    file,
    options::{ButtonOptions, StoreOptions},
};
use crate::core::sanitize::normalize_ws;
use crate::content::PageSession;
use crate::model::{FilterOptions, SortBy, SortOrder};
use crate::port::CartPort;
use crate::storage::{FileStore, Request, StorageService};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Universal Cart: collect products from any shop page", long_about = None)]
struct Cli {
    /// Store file (default: from .store/config.txt, else .store/storage.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a saved page looks like a product page
    Detect(PageArgs),

    /// Extract the product from a saved page and add it to the cart
    AddPage(PageArgs),

    /// List products (cart tab unless --wishlist)
    List(ListArgs),

    /// Remove a product by id
    Remove { id: String },

    /// Move a product to the wishlist
    Wishlist { id: String },

    /// Move a product back to the cart
    Cart { id: String },

    /// Set a product's quantity (values below 1 are stored as 1)
    Quantity { id: String, quantity: u32 },

    /// Cart/wishlist counts and the cart total
    Totals,

    /// Current badge text
    Badge,

    /// Read one JSON request from stdin and print the JSON response
    Message,
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page location (sets source, sourceIcon and url)
    #[arg(long)]
    url: String,

    /// Saved HTML ('-' for stdin)
    #[arg(long, default_value = "-")]
    file: String,
}

#[derive(clap::Args)]
struct ListArgs {
    #[arg(long)]
    wishlist: bool,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    min: Option<f64>,
    #[arg(long)]
    max: Option<f64>,
    #[arg(long)]
    search: Option<String>,
    /// price | name | date | source
    #[arg(long, default_value = "date")]
    sort: SortBy,
    /// asc | desc
    #[arg(long, default_value = "desc")]
    order: SortOrder,
    /// Print the filtered array as JSON
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    fn filters(&self) -> FilterOptions {
        let price_range = match (self.min, self.max) {
            (None, None) => None,
            (lo, hi) => Some((lo.unwrap_or(0.0), hi.unwrap_or(f64::INFINITY))),
        };
        FilterOptions {
            category: self.category.clone(),
            source: self.source.clone(),
            price_range,
            search_query: self.search.clone(),
            sort_by: Some(self.sort),
            sort_order: Some(self.order),
            show_wishlist: Some(self.wishlist),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let opts = file::load(&StoreOptions::default().config_path());
    crate::log::set_log_path(opts.store.log_path());
    let path = cli.store.unwrap_or_else(|| opts.store.store_path());

    let store = FileStore::open(&path)
        .wrap_err_with(|| format!("Failed to open store at {}", path.display()))?;
    let service = StorageService::new(store);

    match cli.command {
        Commands::Detect(page) => {
            let session = load_page(&page, &opts.button)?;
            let sig = session.signals();
            println!("product page: {}", if sig.is_product_page() { "yes" } else { "no" });
            println!(
                "  price={} add_to_cart={} title={} image={}",
                sig.price, sig.add_to_cart, sig.title, sig.image
            );
        }
        Commands::AddPage(page) => {
            let mut session = load_page(&page, &opts.button)?;
            if !session.is_product_page() {
                println!("Not a product page: {}", page.url);
                return Ok(());
            }
            match session.click(&service, Instant::now()) {
                Some(state) => {
                    let label = session.button().map(|b| b.label()).unwrap_or_default();
                    logf!("CLI: add-page {} → {:?}", page.url, state);
                    println!("{label}");
                }
                None => println!("No product name/price found on the page"),
            }
        }
        Commands::List(args) => {
            let cart = fetched(&service)?;
            let products = cart.filter_products(&args.filters());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&products)?);
            } else {
                for p in &products {
                    println!(
                        "{}\t{}\tx{}\t{}\t{}",
                        p.id.as_deref().unwrap_or("-"),
                        line_total(p),
                        p.quantity(),
                        p.source,
                        normalize_ws(&p.name)
                    );
                }
                println!("{} product(s)", products.len());
            }
        }
        Commands::Remove { id } => {
            let mut cart = fetched(&service)?;
            report(cart.remove_product(&id), "Removed", &id)?;
        }
        Commands::Wishlist { id } => {
            let mut cart = fetched(&service)?;
            report(cart.move_to_wishlist(&id), "Moved to wishlist", &id)?;
        }
        Commands::Cart { id } => {
            let mut cart = fetched(&service)?;
            report(cart.move_to_cart(&id), "Moved to cart", &id)?;
        }
        Commands::Quantity { id, quantity } => {
            let mut cart = fetched(&service)?;
            report(cart.update_quantity(&id, quantity), "Quantity updated", &id)?;
        }
        Commands::Totals => {
            let t = fetched(&service)?.cart_totals();
            println!("cart: {}", t.cart_count);
            println!("wishlist: {}", t.wishlist_count);
            println!("total: ${}", t.total_price);
        }
        Commands::Badge => match badge::refresh(&service) {
            Some(b) => println!("[{}]", b.text),
            None => println!("(badge skipped)"),
        },
        Commands::Message => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            let request: Request =
                serde_json::from_str(&input).wrap_err("Failed to parse request JSON")?;
            let response = service.send(request)?;
            println!("{}", serde_json::to_string(&response)?);
        }
    }
    Ok(())
}

fn load_page(page: &PageArgs, button: &ButtonOptions) -> Result<PageSession> {
    let html = if page.file == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        s
    } else {
        fs::read_to_string(&page.file)
            .wrap_err_with(|| format!("Failed to read {}", page.file))?
    };
    PageSession::load_with_options(&page.url, &html, button)
        .wrap_err_with(|| format!("Bad page URL: {}", page.url))
}

fn fetched<P: CartPort>(port: P) -> Result<Cart<P>> {
    let mut cart = Cart::new(port);
    if !cart.fetch_products() {
        bail!("Failed to fetch products");
    }
    Ok(cart)
}

fn report(ok: bool, done: &str, id: &str) -> Result<()> {
    if !ok {
        bail!("No change for id {id}");
    }
    println!("{done}: {id}");
    Ok(())
}
