//! Genesis block construction and Skein block hashing
//!
//! Transactions, scripts, merkle roots and header serialization come from
//! the `bitcoin` crate. Only the proof-of-work hash differs: Skeincoin
//! hashes the 80-byte header with SHA-256 over Skein-512-512.

use crate::{Error, Result};
use bitcoin::opcodes::all::OP_CHECKSIG;
use bitcoin::hashes::Hash;
use bitcoin::script::{self, PushBytes};
use bitcoin::{
    absolute, block, transaction, Amount, Block, BlockHash, CompactTarget, OutPoint, Sequence,
    Transaction, TxIn, TxMerkleNode, TxOut, Witness,
};
use sha2::{Digest, Sha256};
use skein::digest::consts::U64;
use skein::Skein512;

/// Base units per coin
pub const COIN: u64 = 100_000_000;

/// nBits value pushed at the start of every genesis coinbase
const COINBASE_BITS_PUSH: i64 = 486_604_799;

/// Proof-of-work hash: SHA-256 over the Skein-512-512 digest
pub fn skein_hash(data: &[u8]) -> [u8; 32] {
    let inner = Skein512::<U64>::digest(data);
    Sha256::digest(inner).into()
}

/// Skeincoin hash of a block header
pub fn block_hash(header: &block::Header) -> BlockHash {
    let raw = bitcoin::consensus::serialize(header);
    BlockHash::from_byte_array(skein_hash(&raw))
}

/// Literal inputs for a genesis block
#[derive(Debug, Clone, Copy)]
pub struct GenesisTemplate {
    /// Header timestamp
    pub time: u32,
    /// Header nonce
    pub nonce: u32,
    /// Header compact target
    pub bits: u32,
    /// Header version
    pub version: i32,
    /// Coinbase output value
    pub reward: Amount,
    /// Text embedded in the coinbase
    pub message: &'static str,
    /// Public key paid by the (unspendable) coinbase output
    pub output_pubkey: &'static [u8],
}

fn push_bytes(data: &[u8]) -> Result<&PushBytes> {
    <&PushBytes>::try_from(data).map_err(|e| Error::Genesis(e.to_string()))
}

impl GenesisTemplate {
    /// Build the genesis block.
    ///
    /// The single coinbase output can never be spent: it was not in the
    /// UTXO set when the chain started.
    pub fn build(&self) -> Result<Block> {
        let in_script = script::Builder::new()
            .push_int(COINBASE_BITS_PUSH)
            .push_slice([4u8]) // CScriptNum(4); same bytes as the crate-private push_int_non_minimal(4)
            .push_slice(push_bytes(self.message.as_bytes())?)
            .into_script();
        let out_script = script::Builder::new()
            .push_slice(push_bytes(self.output_pubkey)?)
            .push_opcode(OP_CHECKSIG)
            .into_script();

        let coinbase = Transaction {
            version: transaction::Version::ONE,
            lock_time: absolute::LockTime::ZERO,
            input: vec![TxIn {
                previous_output: OutPoint::null(),
                script_sig: in_script,
                sequence: Sequence::MAX,
                witness: Witness::default(),
            }],
            output: vec![TxOut {
                value: self.reward,
                script_pubkey: out_script,
            }],
        };

        let mut genesis = Block {
            header: block::Header {
                version: block::Version::from_consensus(self.version),
                prev_blockhash: BlockHash::all_zeros(),
                merkle_root: TxMerkleNode::all_zeros(),
                time: self.time,
                bits: CompactTarget::from_consensus(self.bits),
                nonce: self.nonce,
            },
            txdata: vec![coinbase],
        };
        genesis.header.merkle_root = genesis
            .compute_merkle_root()
            .ok_or_else(|| Error::Genesis("genesis block has no transactions".to_string()))?;
        Ok(genesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> GenesisTemplate {
        GenesisTemplate {
            time: 1,
            nonce: 2,
            bits: 0x207f_ffff,
            version: 1,
            reward: Amount::from_sat(COIN / 10_000),
            message: "hello",
            output_pubkey: &[0x02; 33],
        }
    }

    #[test]
    fn test_coinbase_script_sig_layout() {
        let block = template().build().unwrap();
        let script_sig = block.txdata[0].input[0].script_sig.as_bytes();
        // push(ffff001d), push(04), push("hello")
        assert_eq!(
            script_sig,
            &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x05, b'h', b'e', b'l', b'l', b'o']
        );
    }

    #[test]
    fn test_long_message_uses_pushdata1() {
        let message = "Guardian - 1 Nov 2013 - RBS places troublesome assets worth £38bn in internal 'bad bank'";
        let block = GenesisTemplate { message, ..template() }.build().unwrap();
        let script_sig = block.txdata[0].input[0].script_sig.as_bytes();
        assert_eq!(&script_sig[7..9], &[0x4c, 89]);
        assert_eq!(&script_sig[9..], message.as_bytes());
    }

    #[test]
    fn test_coinbase_output_pays_pubkey() {
        let block = template().build().unwrap();
        let output = &block.txdata[0].output[0];
        assert_eq!(output.value, Amount::from_sat(10_000));
        let script = output.script_pubkey.as_bytes();
        assert_eq!(script[0], 33);
        assert_eq!(script.last(), Some(&OP_CHECKSIG.to_u8()));
    }

    #[test]
    fn test_genesis_shape() {
        let block = template().build().unwrap();
        assert_eq!(block.txdata.len(), 1);
        assert!(block.txdata[0].is_coinbase());
        assert_eq!(block.compute_merkle_root(), Some(block.header.merkle_root));
        assert_eq!(block.header.prev_blockhash, BlockHash::all_zeros());
        assert_eq!(block.header.bits, CompactTarget::from_consensus(0x207f_ffff));
    }

    #[test]
    fn test_skein_hash_differs_from_sha256d() {
        let header = template().build().unwrap().header;
        assert_eq!(bitcoin::consensus::serialize(&header).len(), 80);
        assert_ne!(block_hash(&header), header.block_hash());
    }
}
