//! The puzzle room: seven locks and their functional tools
//!
//! Vault gating lists every other lock, in declaration order.

use crate::types::{LockNode, ToolDescriptor};

/// Lock ids in declaration order; also the decoy namespaces
pub const LOCK_IDS: [&str; 7] = [
    "victorian", "chinese", "medieval", "japanese", "digital", "library", "vault",
];

/// Item granted by the Japanese lock
pub const BELL_ITEM: &str = "Bell";

pub fn default_locks() -> Vec<LockNode> {
    vec![
        LockNode::new(
            "victorian",
            "Victorian Lock",
            "3063",
            "A heavy brass padlock with three spinning wheels.",
        ),
        LockNode::new(
            "chinese",
            "Chinese Puzzle Box",
            "4411",
            "An intricate wooden box with sliding tiles and dragon carvings.",
        )
        .requires(["victorian"]),
        LockNode::new(
            "medieval",
            "Medieval Shield",
            "53",
            "A weathered heraldic shield mounted on the wall.",
        )
        .requires(["victorian"]),
        LockNode::new(
            "japanese",
            "Antique Japanese Lock",
            "773",
            "A rusted iron mechanism protecting a small shrine.",
        )
        .requires(["chinese"]),
        LockNode::new(
            "digital",
            "Digital Keypad",
            "42",
            "A modern 0-9 keypad glowing with a faint blue light.",
        )
        .requires(["medieval"]),
        // Opened by reading the journal, not by a typed answer
        LockNode::new("library", "Manuscript Library", "OPEN", "Rows of dusty bookshelves.")
            .requires(["digital"]),
        LockNode::new("vault", "The Final Vault", "979", "A massive circular bank vault door.")
            .requires(["victorian", "chinese", "medieval", "japanese", "digital", "library"]),
    ]
}

pub fn default_tools() -> Vec<ToolDescriptor> {
    vec![
        // Victorian
        ToolDescriptor::query(
            "victorian_inspect_wheels",
            "View current numbers on the brass wheels",
            "Wheel 1: 233\nWheel 2: 239\nWheel 3: 251",
        ),
        ToolDescriptor::query(
            "victorian_read_plaque",
            "Read the inscription on the lock",
            "\"Positions mark the golden spiral's path... Sum reveals eternal truth... Masked by fourth power of ten.\"",
        ),
        ToolDescriptor::attempt(
            "victorian_attempt_combination",
            "Input a 4-digit code. Usage: victorian_attempt_combination <code_number>",
            "victorian",
        ),
        // Chinese
        ToolDescriptor::query(
            "chinese_peer_inside",
            "Look through the gaps in the tiles",
            "\"Four dragons guard the pearl. North, South, East, West.\"",
        ),
        ToolDescriptor::query(
            "chinese_inspect_panels",
            "Examine the sliding panels",
            "The panels are numbered: 4, 4, 1, 1.",
        ),
        ToolDescriptor::attempt(
            "chinese_attempt_alignment",
            "Align the tiles. Usage: chinese_attempt_alignment <code_number>",
            "chinese",
        ),
        // Medieval
        ToolDescriptor::query(
            "medieval_measure_ward_angle",
            "Measure the angle of the shield's ward",
            "The angle is exactly 53 degrees.",
        ),
        ToolDescriptor::query(
            "medieval_inspect_heraldry",
            "Examine the shield's coat of arms",
            "\"The prime defender stands alone.\"",
        ),
        ToolDescriptor::attempt(
            "medieval_shout_password",
            "Shout a password at the shield. Usage: medieval_shout_password <number>",
            "medieval",
        ),
        // Japanese
        ToolDescriptor::query(
            "japanese_inspect_shrine",
            "Look at what the lock is protecting",
            "A ceremonial bell rests here.",
        ),
        ToolDescriptor::query(
            "japanese_scrutinize_mechanism",
            "Closely examine the rust patterns",
            "You find a faint etching: \"773\".",
        ),
        ToolDescriptor::attempt_with_grant(
            "japanese_unlock_with_code",
            "Enter the code. Usage: japanese_unlock_with_code <code_number>",
            "japanese",
            BELL_ITEM,
            "[LOOT DROP] You obtained: Bell (Value: 773)",
        ),
        // Digital
        ToolDescriptor::query(
            "digital_scan_fingerprint",
            "Scan for latent fingerprints",
            "Bio-residue suggests the user was thinking about \"Life, the Universe, and Everything\".",
        ),
        ToolDescriptor::attempt(
            "digital_enter_pin",
            "Enter the PIN. Usage: digital_enter_pin <number>",
            "digital",
        ),
        // Library
        ToolDescriptor::open(
            "library_read_journal",
            "Read the open journal on the desk",
            "library",
            "\"The final vault requires the sum of our history, minus the ringing of the bell.\"",
        ),
        // Vault
        ToolDescriptor::query(
            "vault_inspect_door",
            "Examine the massive vault door",
            "It requires a final calculation based on all previous challenges.",
        ),
        ToolDescriptor::attempt(
            "vault_turn_wheel",
            "Turn the vault wheel to a number. Usage: vault_turn_wheel <number>",
            "vault",
        ),
    ]
}
