use base64::prelude::*;
use log::debug;

use aestest::Result;

// output of the companion encryption program
const ENC_CIPHER: &str = "ZeYXkFf8wPbvzdC91V4adwx4U56o2zMMOathdDYuBOE=";

const KEY: &[u8; 16] = b"your key 16bytes";
const IV: &[u8; 16] = b"1234567812345678";

fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    let text = recover_text(ENC_CIPHER)?;
    println!("{text}");

    Ok(())
}

fn recover_text(enc_cipher: &str) -> Result<String> {
    let cipher = BASE64_STANDARD.decode(enc_cipher)?;
    debug!("decoded {} bytes of ciphertext", cipher.len());

    let text_bytes = crypto::decrypt(KEY, IV, &cipher)?;
    let text = String::from_utf8(text_bytes)?;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aestest::Error;

    #[test]
    fn test_recover_text() {
        let text = recover_text(ENC_CIPHER).unwrap();
        assert_eq!(text, "This is my plain text");
    }

    #[test]
    fn test_rejects_malformed_base64() {
        let result = recover_text("not base64!!!");
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_rejects_non_utf8_plaintext() {
        // decrypts under KEY/IV to ff fe fd
        let result = recover_text("fwPWuzuquLIbCUXMPkqEGA==");
        assert!(matches!(result, Err(Error::OutputEncoding(_))));
    }

    #[test]
    fn test_rejects_truncated_ciphertext() {
        // drops the final block, leaving garbage padding in the new last block
        let result = recover_text("ZeYXkFf8wPbvzdC91V4adw==");
        assert!(matches!(
            result,
            Err(Error::Decrypt(crypto::Error::InvalidPadding))
        ));
    }
}
