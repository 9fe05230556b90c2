pub mod score_cards;
