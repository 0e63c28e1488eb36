//! Example using Ed25519 signatures

use natrium_sign::eddsa;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ed25519 Signature Example");
    println!("========================");

    let params = eddsa::init()?;
    println!(
        "Sizes: private key {} bytes, public key {} bytes, signature {} bytes",
        params.private_key_len, params.public_key_len, params.signature_len
    );

    println!("Generating Ed25519 private key...");
    let private_key = eddsa::generate_key()?;
    let public_key = private_key.public_key()?;
    println!("Public key: {}", public_key);

    let message = b"This is a test message that will be signed with Ed25519";
    println!("Message: {:?}", std::str::from_utf8(message)?);

    println!("Signing message...");
    let signature = private_key.sign(message)?;
    println!("Signature: {:?}", signature);

    println!("Verifying signature...");
    public_key.verify(message, signature.as_ref())?;
    println!("Signature verified!");

    let modified_message = b"This is a MODIFIED message that will NOT verify";
    println!("\nTrying with modified message...");
    match public_key.verify(modified_message, signature.as_ref()) {
        Ok(()) => println!("Signature incorrectly verified!"),
        Err(e) => println!("Signature correctly failed verification: {}", e),
    }

    Ok(())
}
