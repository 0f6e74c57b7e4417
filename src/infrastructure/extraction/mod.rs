pub mod upstage;
