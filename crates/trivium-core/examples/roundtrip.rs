//! Demonstrates an encrypt/decrypt round trip and keystream inspection.

use trivium_core::{bits_to_hex, decrypt, encrypt, initialize, keystream};

fn main() {
    let key = "0123456789abcdef0123";
    let iv = "fedcba9876543210fedc";

    let ciphertext = encrypt(b"attack at dawn", key, iv).expect("key and IV are valid");
    let plaintext = decrypt(&ciphertext, key, iv).expect("ciphertext came from encrypt");
    assert_eq!(plaintext, b"attack at dawn");

    let state = initialize(key, iv).expect("key and IV are valid");
    println!("ciphertext: {ciphertext}");
    println!("first keystream bits: {}", bits_to_hex(&keystream(&state, 64)));
    println!("round trip succeeded");
}
