//! Dumps the JSON catalog of one epoch to stdout.
//!
//! ```text
//! cargo run -p hiveot-vocab-spec --example dump_vocab -- ht
//! ```

use hiveot_vocab_spec::{epochs, serializer::json};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let namespace = std::env::args().nth(1).unwrap_or_else(|| "hiveot".to_string());
    let schema = epochs::by_namespace(&namespace)?
        .ok_or_else(|| format!("unknown epoch `{namespace}`"))?;
    println!("{}", serde_json::to_string_pretty(&json::to_json(&schema))?);
    Ok(())
}
