use handrank_engine::cards::{Card, Suit};
use handrank_engine::cardset::{CommunityCards, Hand};
use handrank_engine::deck::Deck;
use handrank_engine::errors::PokerError;
use handrank_engine::hand::{compare_hands, evaluate, rank_pool, Category, RankedHand};

fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|t| t.parse().expect("valid card"))
        .collect()
}

fn read(board: &str, hand: &str) -> RankedHand {
    let board = CommunityCards::from_cards(&cards(board)).expect("valid board");
    evaluate(&Hand::new(cards(hand)), &board).expect("rankable pool")
}

fn assert_read(board: &str, hand: &str, category: Category, shown: &str) {
    let ranked = read(board, hand);
    assert_eq!(ranked.category(), category, "board {} hand {}", board, hand);
    assert_eq!(ranked.to_string(), shown, "board {} hand {}", board, hand);
}

fn straight_high(ranked: &RankedHand) -> String {
    match ranked {
        RankedHand::Straight { high, .. } | RankedHand::StraightFlush { high, .. } => {
            high.to_string()
        }
        other => panic!("expected a straight, got {:?}", other),
    }
}

#[test]
fn reads_flush() {
    let ranked = read("2s 7c 8c Jc Ah", "Kc Qc");
    assert_eq!(ranked.to_string(), "KcQcJc8c7c");
    assert!(matches!(
        ranked,
        RankedHand::Flush {
            suit: Suit::Clubs,
            ..
        }
    ));
}

#[test]
fn four_suited_cards_are_not_a_flush() {
    assert_eq!(read("2s 7c 8c Jc Qh", "Ac 4d").category(), Category::HighCard);
}

#[test]
fn reads_wheel() {
    let ranked = read("2s 3c 8d 5c Ah", "Ac 4d");
    assert_eq!(ranked.category(), Category::Straight);
    assert_eq!(ranked.to_string(), "Ah2s3c4d5c");
    assert_eq!(straight_high(&ranked), "5c");
}

#[test]
fn reads_wheel_with_duplicates() {
    let ranked = read("2s 3c 2d Ad 5h", "Ac 4d");
    assert_eq!(ranked.to_string(), "Ad2s3c4d5h");
    assert_eq!(straight_high(&ranked), "5h");
}

#[test]
fn near_straights_are_high_card() {
    assert_eq!(read("2s 3c 8d Kc Jh", "Ac 4d").category(), Category::HighCard);
    assert_eq!(read("2s Qs 8d Kc Jh", "Ac 4d").category(), Category::HighCard);
}

#[test]
fn reads_straights_wherever_the_run_sits() {
    for (board, hand, shown, high) in [
        ("5s Qs 8d Kc 9h", "6c 7d", "9h8d7d6c5s", "9h"),
        ("2s 9s 8d 10c Ah", "6c 7d", "10c9s8d7d6c", "10c"),
        ("2s 3h 10s 9d 6c", "7c 8d", "10s9d8d7c6c", "10s"),
        ("2s 4s 5d 6c 7h", "Ac 3d", "7h6c5d4s3d", "7h"),
        ("As 4s 5d Kc Qh", "Jc 10d", "AsKcQhJc10d", "As"),
        ("5h 6s 7d 8c 9h", "2c 2d", "9h8c7d6s5h", "9h"),
    ] {
        let ranked = read(board, hand);
        assert_eq!(ranked.category(), Category::Straight, "board {}", board);
        assert_eq!(ranked.to_string(), shown);
        assert_eq!(straight_high(&ranked), high);
    }
}

#[test]
fn flush_outranks_straight() {
    assert_read("5c 6c 7d 8c 9h", "Ac Kc", Category::Flush, "AcKc8c6c5c");
}

#[test]
fn reads_made_hands_with_kickers() {
    assert_read("Ac As Kd 8c 9h", "Ah Ad", Category::Quads, "AcAsAhAd+Kd");
    assert_read("Ac As Kd 8c 9h", "Ah 2d", Category::ThreeOfKind, "AcAsAh+Kd9h");
    assert_read("Ac As Kd 8c 9h", "Ah Kc", Category::FullHouse, "AcAsAhKdKc");
    assert_read("Ac Js Kd 8c 9h", "Ah Kc", Category::TwoPair, "AcAhKdKc+Js");
    assert_read("Ac Js Kd 8c 9h", "Ah Qc", Category::Pair, "AcAh+KdQcJs");
    assert_read("2c Js Kd 8c 9h", "Ah Qc", Category::HighCard, "Ah+KdQcJs9h");
}

#[test]
fn reads_straight_and_royal_flushes() {
    let straight_flush = read("5c 6c 7c 2c Ac", "8c 9c");
    assert_eq!(straight_flush.category(), Category::StraightFlush);
    assert_eq!(straight_flush.to_string(), "9c8c7c6c5c");
    assert_eq!(straight_high(&straight_flush), "9c");

    assert_read(
        "5c 6c 10c Jc Qc",
        "Ac Kc",
        Category::RoyalFlush,
        "AcKcQcJc10c",
    );
}

#[test]
fn same_ranks_across_suits_stay_a_straight() {
    assert_eq!(
        read("10c Jd Qc 2s 5h", "Kc Ac").category(),
        Category::Straight
    );
}

#[test]
fn flop_board_with_hole_cards_is_enough() {
    assert_read("Ac As Kd", "Ah Ad", Category::Quads, "AcAsAhAd+Kd");
}

#[test]
fn pools_under_five_cards_are_rejected() {
    let board = CommunityCards::new();
    let hand = Hand::new(cards("Ah Ad"));
    assert!(matches!(
        evaluate(&hand, &board),
        Err(PokerError::EmptyInput(_))
    ));
    assert!(matches!(
        rank_pool(&cards("Ah Ad Kc 2s")),
        Err(PokerError::EmptyInput(_))
    ));
}

#[test]
fn ranker_never_skips_a_better_category() {
    for seed in 0..300 {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let pool = deck.deal_n(7).expect("fresh deck");
        let ranked = rank_pool(&pool).unwrap();
        for category in Category::BY_PRIORITY {
            if category.detect(&pool).is_some() {
                assert!(
                    category <= ranked.category(),
                    "seed {}: {} matched but ranker chose {}",
                    seed,
                    category,
                    ranked.category()
                );
            }
        }
        assert!(ranked.category().detect(&pool).is_some());
    }
}

#[test]
fn categories_are_totally_ordered_regardless_of_cards() {
    // One pool per category, worst first, chosen so card values fight the category order.
    let ladder = [
        "Ah Kd Qc Js 9h 7d 2c",
        "2h 2d 3c 4s 6h 7d 8c",
        "2h 2d 3c 3s 5h 7d 8c",
        "2h 2d 2c 4s 6h 7d 8c",
        "Ah 2d 3c 4s 5h 9d Jc",
        "2h 3h 4h 5h 7h 9d Jc",
        "2h 2d 2c 3s 3h 7d 8c",
        "2h 2d 2c 2s 3h 4d 5c",
        "Ah 2h 3h 4h 5h 9d Jc",
        "10d Jd Qd Kd Ad 2c 3c",
    ];
    let ranked: Vec<RankedHand> = ladder.iter().map(|p| rank_pool(&cards(p)).unwrap()).collect();
    for (i, hand) in ranked.iter().enumerate() {
        assert_eq!(hand.category(), Category::BY_PRIORITY[9 - i]);
        assert_eq!(hand, hand);
        for lower in &ranked[..i] {
            assert!(hand > lower, "{} should beat {}", hand, lower);
            assert!(lower < hand);
        }
    }
}

#[test]
fn equal_values_in_other_suits_are_equal() {
    let a = read("6d 7c 9d 10h Jh", "As Kc");
    let b = read("6d 7c 9d 10h Jh", "Ah Ks");
    assert_eq!(a, b);
    assert!(compare_hands(&a.strength(), &b.strength()).is_eq());
}

#[test]
fn royal_flushes_are_all_equal() {
    let spades = rank_pool(&cards("10s Js Qs Ks As 2d 3d")).unwrap();
    let hearts = rank_pool(&cards("10h Jh Qh Kh Ah 9c 9d")).unwrap();
    assert_eq!(spades, hearts);
}

#[test]
fn strength_keys_follow_the_tie_break_order() {
    let key = |pool: &str| rank_pool(&cards(pool)).unwrap().strength().key;
    assert_eq!(key("9c 9d 9h 9s Kc 2d 3h"), [9, 13, 0, 0, 0]);
    assert_eq!(key("7c 7d 8h 8s Kc 2d 3h"), [8, 7, 13, 0, 0]);
    assert_eq!(key("7c 7d 7h 4s Kc 2d Jh"), [7, 13, 11, 0, 0]);
    assert_eq!(key("7c 7d 9h 4s Kc 2d Jh"), [7, 13, 11, 9, 0]);
    assert_eq!(key("5h 6s 7d 8c 9h 2c 2d"), [9, 0, 0, 0, 0]);
    assert_eq!(key("2c Qc 9c 7c 4c Jd 3d"), [12, 9, 7, 4, 2]);
}

#[test]
fn ranked_hand_serializes_with_its_category() {
    let ranked = read("Ac As Kd 8c 9h", "Ah Ad");
    let json = serde_json::to_value(ranked).unwrap();
    assert_eq!(json["category"], "Quads");
    assert!(json["quads"].is_array());
}
