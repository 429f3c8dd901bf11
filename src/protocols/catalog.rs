// File: src/protocols/catalog.rs
//! Static protocol table and alias table for the bundled catalog.
//!
//! Entry order is significant: the resolver's substring fallback scans the
//! table in this order and returns the first hit, so reordering entries
//! changes observable behavior for partial inputs.

use super::ProtocolEntry;

pub fn entries() -> Vec<ProtocolEntry> {
    vec![
        ProtocolEntry {
            key: "SOON_SVM",
            name: "SOON SVM",
            description: "SOON SVM is a high-performance rollup stack built on the Solana Virtual Machine. \
It decouples execution from settlement so chains can inherit SVM throughput while settling on a base layer of their choice.\n\n\
Emrys uses a forked SOON SVM implementation as the execution environment on the Solana side of the bridge, \
which keeps transfer finality in the low-second range even under load.",
        },
        ProtocolEntry {
            key: "SVM",
            name: "Solana Virtual Machine (SVM)",
            description: "The SVM is Solana's parallel transaction execution environment. \
Unlike single-threaded virtual machines, the SVM schedules non-conflicting transactions concurrently, \
which is what gives Solana-family chains their high throughput and low fees.\n\n\
Emrys runs its own forked SVM implementation for bridge-side execution.",
        },
        ProtocolEntry {
            key: "IBC",
            name: "Inter-Blockchain Communication (IBC)",
            description: "IBC is the Cosmos ecosystem's standard for trust-minimized message passing between sovereign chains. \
Light clients on each side verify the counterparty's consensus, so no multisig or custodian sits in the transfer path.\n\n\
Emrys uses a forked IBC implementation to move assets and messages between Cosmos-family chains and the rest of the bridge network.",
        },
        ProtocolEntry {
            key: "WALRUS",
            name: "Walrus",
            description: "Walrus is the decentralized storage layer used by Emrys. \
Transaction data is encrypted, split into fragments, and distributed across multiple storage nodes, \
ensuring cross-chain transaction records remain secure, immutable, and retrievable from any chain.\n\n\
Storage proofs let anyone verify that bridge history has not been tampered with.",
        },
        ProtocolEntry {
            key: "ZPL_UTXO_BRIDGE",
            name: "ZPL UTXO Bridge",
            description: "The ZPL UTXO Bridge connects UTXO-model chains such as Bitcoin to account-model chains. \
Deposits are locked against zero-knowledge proofs of the UTXO set rather than a custodial signer set.\n\n\
Emrys uses the ZPL UTXO Bridge for BTC-side transfers.",
        },
        ProtocolEntry {
            key: "UTXO",
            name: "UTXO model",
            description: "UTXO (Unspent Transaction Output) is the accounting model used by Bitcoin and several other chains. \
Instead of account balances, ownership is tracked as a set of discrete spendable outputs, \
which simplifies parallel validation and makes inclusion proofs compact.",
        },
        ProtocolEntry {
            key: "SOLEND",
            name: "Solend",
            description: "Solend is the leading lending and borrowing protocol on Solana. \
Users supply assets to earn interest or borrow against collateral, with rates set algorithmically by pool utilization.\n\n\
It is a common destination for assets bridged to Solana through Emrys.",
        },
        ProtocolEntry {
            key: "OSMOSIS",
            name: "Osmosis",
            description: "Osmosis is the largest decentralized exchange in the Cosmos ecosystem, built as its own app-chain. \
It pioneered IBC-native trading, letting assets from any connected Cosmos chain be swapped without leaving the IBC network.\n\n\
Emrys routes Cosmos-side liquidity through Osmosis pools.",
        },
        ProtocolEntry {
            key: "ETHEREUM",
            name: "Ethereum",
            description: "Ethereum is the largest smart-contract platform, secured by proof-of-stake consensus. \
Its EVM is the most widely adopted execution environment in the industry, hosting the deepest DeFi liquidity.\n\n\
Emrys supports bridging ETH and ERC-20 tokens (including USDC and USDT) to and from Ethereum.",
        },
        ProtocolEntry {
            key: "SOLANA",
            name: "Solana",
            description: "Solana is a high-performance blockchain using proof-of-history alongside proof-of-stake \
to reach sub-second block times and very low fees. Its parallel SVM runtime executes non-conflicting transactions concurrently.\n\n\
Emrys supports bridging SOL and SPL tokens to and from Solana.",
        },
        ProtocolEntry {
            key: "BITCOIN",
            name: "Bitcoin",
            description: "Bitcoin is the original blockchain network and the largest by market value, \
secured by proof-of-work and the UTXO accounting model.\n\n\
Emrys bridges BTC through the ZPL UTXO Bridge rather than wrapped-custodial representations.",
        },
        ProtocolEntry {
            key: "POLYGON",
            name: "Polygon",
            description: "Polygon is an Ethereum scaling ecosystem offering EVM-compatible chains with low fees. \
Its PoS chain is one of the most used networks for payments and gaming.\n\n\
Emrys supports bridging MATIC and popular ERC-20 tokens to and from Polygon.",
        },
        ProtocolEntry {
            key: "AVALANCHE",
            name: "Avalanche",
            description: "Avalanche is a proof-of-stake platform whose consensus family reaches finality in under two seconds. \
Its C-Chain is EVM-compatible, and subnets let applications run their own customized chains.\n\n\
Emrys supports bridging AVAX and C-Chain assets.",
        },
        ProtocolEntry {
            key: "BSC",
            name: "BNB Smart Chain (BSC)",
            description: "BSC is an EVM-compatible chain operated by a compact validator set, \
trading some decentralization for low fees and high throughput. It hosts one of the largest retail DeFi ecosystems.\n\n\
Emrys supports bridging BNB and BEP-20 tokens to and from BSC.",
        },
        ProtocolEntry {
            key: "COSMOS",
            name: "Cosmos",
            description: "Cosmos is an ecosystem of sovereign, application-specific blockchains built with the Cosmos SDK \
and connected through IBC. The Cosmos Hub (ATOM) provides shared security and routing for the network.\n\n\
Emrys connects to Cosmos-family chains through its forked IBC implementation.",
        },
        ProtocolEntry {
            key: "POLKADOT",
            name: "Polkadot",
            description: "Polkadot is a heterogeneous multi-chain network where parachains lease security from a central relay chain. \
Cross-chain messaging between parachains is native to the protocol.\n\n\
Polkadot (DOT) support on Emrys is on the roadmap.",
        },
    ]
}

/// Alternative spellings and phrasings mapped to canonical keys.
/// Compared after upper-casing, so entries here are written upper-case.
pub fn aliases() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SOON SVM", "SOON_SVM"),
        ("SOON NETWORK", "SOON_SVM"),
        ("SOLANA VIRTUAL MACHINE", "SVM"),
        ("IBC PROTOCOL", "IBC"),
        ("INTER-BLOCKCHAIN COMMUNICATION", "IBC"),
        ("COSMOS IBC", "IBC"),
        ("WALRUS STORAGE", "WALRUS"),
        ("ZPL UTXO BRIDGE", "ZPL_UTXO_BRIDGE"),
        ("ZPL", "ZPL_UTXO_BRIDGE"),
        ("ETH", "ETHEREUM"),
        ("ETHER", "ETHEREUM"),
        ("SOL", "SOLANA"),
        ("BTC", "BITCOIN"),
        ("MATIC", "POLYGON"),
        ("AVAX", "AVALANCHE"),
        ("BNB", "BSC"),
        ("BINANCE SMART CHAIN", "BSC"),
        ("BNB SMART CHAIN", "BSC"),
        ("ATOM", "COSMOS"),
        ("COSMOS HUB", "COSMOS"),
        ("DOT", "POLKADOT"),
    ]
}
