pub use self::{
    login::Login,
    price_type::{AddPrice, PriceRecord},
    wallet_type::{UpdateWallet, WalletRecord},
};

mod login;
mod price_type;
mod wallet_type;
