pub mod key_contract;
