#![forbid(unsafe_code)]
use clap::{Parser, Subcommand};
use colored::*;
use ledgerchain::blockchain::{to_canonical_string, Block, Ledger};
use ledgerchain::config::{load_config, load_config_from};
use ledgerchain::error::ChainError;
use ledgerchain::transaction::Transaction;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Queues transactions on a fresh ledger and seals them into one block
    Seal {
        /// A transaction as SENDER:RECIPIENT:AMOUNT, may be repeated
        #[arg(long = "tx", value_parser = parse_transaction)]
        transactions: Vec<Transaction>,
        /// Proof to record in the block (defaults to miner.default_proof)
        #[arg(long)]
        proof: Option<u64>,
    },
    /// Prints the canonical hash of a block stored as JSON
    Hash {
        /// File holding one block
        file: PathBuf,
    },
    /// Runs a two-transaction scenario and checks the chain invariants
    Demo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    tracing_subscriber::fmt()
        .with_max_level(config.logging.tracing_level()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Seal {
            transactions,
            proof,
        } => seal(transactions, proof.unwrap_or(config.miner.default_proof)),
        Commands::Hash { file } => hash(&file),
        Commands::Demo => demo(),
    }
}

fn parse_transaction(raw: &str) -> Result<Transaction, String> {
    let (parties, amount) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected SENDER:RECIPIENT:AMOUNT, got {:?}", raw))?;
    let (sender, recipient) = parties
        .split_once(':')
        .ok_or_else(|| format!("expected SENDER:RECIPIENT:AMOUNT, got {:?}", raw))?;
    let amount = amount
        .parse::<i64>()
        .map_err(|e| format!("invalid amount {:?}: {}", amount, e))?;

    Ok(Transaction::new(sender, recipient, amount))
}

fn seal(transactions: Vec<Transaction>, proof: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();

    for tx in transactions {
        let label = format!("{} -> {} ({})", tx.sender, tx.recipient, tx.amount);
        let index = ledger.new_transaction(tx.sender, tx.recipient, tx.amount);
        println!("Queued {} for block #{}", label.bright_white(), index);
    }

    ledger.seal_block(proof);
    ledger.validate()?;

    println!();
    for block in ledger.chain() {
        print_block(block);
    }

    let chain: Vec<Value> = ledger.chain().iter().map(Block::canonical_value).collect();
    println!("{}", "Canonical chain:".bright_green().underline());
    println!("{}", to_canonical_string(&Value::Array(chain)));

    Ok(())
}

fn hash(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(file)?;
    let block: Block = serde_json::from_str(&raw).map_err(ChainError::from)?;
    println!("{}", Ledger::hash(&block));
    Ok(())
}

fn print_block(block: &Block) {
    println!("{}", format!("Block #{}", block.index).bright_cyan().bold());
    println!("  Hash:          {}", block.hash());
    println!("  Previous:      {}", block.previous_hash);
    println!("  Timestamp:     {}", block.timestamp);
    println!("  Proof:         {}", block.proof);
    println!("  Transactions:  {}", block.transactions.len());
    for tx in &block.transactions {
        println!("    {} -> {} : {}", tx.sender, tx.recipient, tx.amount);
    }
    println!();
}

fn demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "LedgerChain demo".bright_cyan().bold());
    println!("{}", "----------------".bright_cyan());

    let mut ledger = Ledger::new();
    let genesis_hash = ledger.last_block().hash();

    ledger.new_transaction("A", "B", 5);
    ledger.new_transaction("B", "C", 3);
    ledger.seal_block(100);
    let next_index = ledger.new_transaction("C", "A", 1);

    let sealed = ledger.block(2)?;
    let checks = [
        ("chain holds two blocks", ledger.len() == 2),
        (
            "block #2 holds both transactions in order",
            sealed.transactions
                == vec![Transaction::new("A", "B", 5), Transaction::new("B", "C", 3)],
        ),
        ("block #2 links to the genesis hash", sealed.previous_hash == genesis_hash),
        ("next transaction targets block #3", next_index == 3),
        ("chain validates", ledger.validate().is_ok()),
    ];

    let mut failed = 0;
    for (name, ok) in checks {
        if ok {
            println!("  {} {}", "✓".bright_green(), name);
        } else {
            println!("  {} {}", "✗".bright_red(), name);
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!("{} demo check(s) failed", failed).into());
    }
    println!("{}", "All checks passed.".bright_green());
    Ok(())
}
