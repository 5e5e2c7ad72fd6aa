//! Command-line interface for the Trivium stream cipher.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use trivium_core::{
    bits_to_bytes, bits_to_hex, clock, decrypt, encrypt, initialize, keystream, register_a,
    register_b, register_c, State,
};

/// Trivium stream cipher CLI.
#[derive(Parser)]
#[command(
    name = "trivium",
    version,
    author,
    about = "Trivium stream cipher (80-bit key/IV, eSTREAM hardware portfolio)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text to lowercase hex ciphertext.
    Encrypt {
        /// Plaintext, taken as UTF-8 bytes.
        text: String,
        /// Key as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// IV as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        iv: String,
    },
    /// Decrypt hex ciphertext back to bytes.
    Decrypt {
        /// Ciphertext as hex characters.
        ciphertext: String,
        /// Key as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// IV as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        iv: String,
    },
    /// Generate raw keystream bytes as hex.
    Keystream {
        /// Key as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// IV as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        iv: String,
        /// Number of keystream bits to generate (multiple of 8).
        #[arg(long, default_value_t = 64)]
        bits: usize,
    },
    /// Show the initialized 288-bit state and optionally single-step it.
    State {
        /// Key as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        key: String,
        /// IV as 20 hex characters.
        #[arg(long, value_name = "HEX")]
        iv: String,
        /// Update rounds to apply after initialization, printed one per line.
        #[arg(long, default_value_t = 0)]
        steps: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt { text, key, iv } => cmd_encrypt(&text, &key, &iv),
        Commands::Decrypt {
            ciphertext,
            key,
            iv,
        } => cmd_decrypt(&ciphertext, &key, &iv),
        Commands::Keystream { key, iv, bits } => cmd_keystream(&key, &iv, bits),
        Commands::State { key, iv, steps } => cmd_state(&key, &iv, steps),
    }
}

fn cmd_encrypt(text: &str, key: &str, iv: &str) -> Result<()> {
    let ciphertext = encrypt(text.as_bytes(), key, iv).context("encrypt")?;
    println!("{ciphertext}");
    Ok(())
}

fn cmd_decrypt(ciphertext: &str, key: &str, iv: &str) -> Result<()> {
    let plaintext = decrypt(ciphertext.trim(), key, iv).context("decrypt")?;
    println!("plaintext (hex): {}", hex::encode(&plaintext));
    match String::from_utf8(plaintext) {
        Ok(text) => println!("plaintext (utf-8): {text}"),
        Err(_) => println!("plaintext (utf-8): <not valid UTF-8>"),
    }
    Ok(())
}

fn cmd_keystream(key: &str, iv: &str, bits: usize) -> Result<()> {
    if bits % 8 != 0 {
        bail!("--bits must be a multiple of 8");
    }
    let state = initialize(key, iv).context("initialize")?;
    let stream = keystream(&state, bits);
    let bytes = bits_to_bytes(&stream).context("pack keystream")?;
    println!("{}", hex::encode(bytes));
    Ok(())
}

fn cmd_state(key: &str, iv: &str, steps: usize) -> Result<()> {
    let mut state = initialize(key, iv).context("initialize")?;
    print_state(&state);
    for round in 1..=steps {
        let (next, bit) = clock(&state);
        state = next;
        println!("round {round}: keystream bit {bit}");
    }
    if steps > 0 {
        print_state(&state);
    }
    Ok(())
}

fn print_state(state: &State) {
    println!("state (hex): {}", bits_to_hex(state));
    println!("register A:  {}", bit_string(register_a(state)));
    println!("register B:  {}", bit_string(register_b(state)));
    println!("register C:  {}", bit_string(register_c(state)));
}

fn bit_string(bits: &[u8]) -> String {
    bits.iter().map(|&bit| char::from(b'0' + bit)).collect()
}
