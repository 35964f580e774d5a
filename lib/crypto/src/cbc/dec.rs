use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::{Error, BLOCK_SIZE};

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    if iv.len() != BLOCK_SIZE {
        return Err(Error::InvalidIvLength(iv.len()));
    }

    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidCiphertextLength(ciphertext.len()));
    }

    let mut buffer = ciphertext.to_vec();

    let len = match key.len() {
        16 => decrypt_in_place::<Aes128CbcDec>(key, iv, &mut buffer)?,
        24 => decrypt_in_place::<Aes192CbcDec>(key, iv, &mut buffer)?,
        32 => decrypt_in_place::<Aes256CbcDec>(key, iv, &mut buffer)?,
        len => return Err(Error::InvalidKeyLength(len)),
    };

    buffer.truncate(len);
    Ok(buffer)
}

fn decrypt_in_place<D>(key: &[u8], iv: &[u8], buffer: &mut [u8]) -> Result<usize, Error>
where
    D: KeyIvInit + BlockDecryptMut,
{
    let decryptor = D::new_from_slices(key, iv).map_err(|_| Error::InvalidKeyLength(key.len()))?;
    let plaintext = decryptor.decrypt_padded_mut::<Pkcs7>(buffer)?;
    Ok(plaintext.len())
}
