//! One detector per hand category.
//!
//! Every detector takes the whole pool (board and hole cards, any order, any size)
//! and returns the populated [`RankedHand`] variant or `None` when the category is
//! absent. A pool too small to fill the variant's kicker slots is also `None`.
//! Detectors are independent of each other; picking the best one is the ranker's job.

use std::cmp::Reverse;

use crate::cards::{Card, Rank, Suit};
use crate::hand::RankedHand;

pub fn royal_flush(pool: &[Card]) -> Option<RankedHand> {
    match straight_flush(pool)? {
        // Ace-high is the only straight flush whose top card is an ace; the wheel tops at five.
        RankedHand::StraightFlush { cards, high } if high.rank == Rank::Ace => {
            Some(RankedHand::RoyalFlush {
                cards,
                suit: high.suit,
            })
        }
        _ => None,
    }
}

pub fn straight_flush(pool: &[Card]) -> Option<RankedHand> {
    let (_, suited) = flush_suit(pool)?;
    let (cards, high) = straight_run(&suited)?;
    Some(RankedHand::StraightFlush { cards, high })
}

pub fn quads(pool: &[Card]) -> Option<RankedHand> {
    let quads: [Card; 4] = first_group(pool)?;
    let [kicker] = kickers::<1>(pool, &quads)?;
    Some(RankedHand::Quads { quads, kicker })
}

/// Highest trips plus the highest other group of at least two.
/// Two sets on the board therefore fill the pair slot from the lower set.
pub fn full_house(pool: &[Card]) -> Option<RankedHand> {
    let groups = value_groups(pool);
    let trips: [Card; 3] = groups
        .iter()
        .find(|g| g.len() == 3)?
        .as_slice()
        .try_into()
        .ok()?;
    let rest = groups
        .iter()
        .find(|g| g.len() >= 2 && g[0].value() != trips[0].value())?;
    Some(RankedHand::FullHouse {
        trips,
        pair: [rest[0], rest[1]],
    })
}

pub fn flush(pool: &[Card]) -> Option<RankedHand> {
    let (suit, suited) = flush_suit(pool)?;
    let cards = top_five(suited)?;
    Some(RankedHand::Flush { cards, suit })
}

pub fn straight(pool: &[Card]) -> Option<RankedHand> {
    let (cards, high) = straight_run(pool)?;
    Some(RankedHand::Straight { cards, high })
}

pub fn three_of_kind(pool: &[Card]) -> Option<RankedHand> {
    let trips: [Card; 3] = first_group(pool)?;
    let kickers = kickers::<2>(pool, &trips)?;
    Some(RankedHand::ThreeOfKind { trips, kickers })
}

/// The two highest pairs; a third pair on the board can only play as the kicker.
pub fn two_pair(pool: &[Card]) -> Option<RankedHand> {
    let mut pairs = value_groups(pool).into_iter().filter(|g| g.len() == 2);
    let high_pair: [Card; 2] = pairs.next()?.try_into().ok()?;
    let low_pair: [Card; 2] = pairs.next()?.try_into().ok()?;
    let [kicker] = kickers::<1>(pool, &[high_pair, low_pair].concat())?;
    Some(RankedHand::TwoPair {
        high_pair,
        low_pair,
        kicker,
    })
}

pub fn pair(pool: &[Card]) -> Option<RankedHand> {
    let pair: [Card; 2] = first_group(pool)?;
    let kickers = kickers::<3>(pool, &pair)?;
    Some(RankedHand::Pair { pair, kickers })
}

pub fn high_card(pool: &[Card]) -> Option<RankedHand> {
    let cards = top_five(pool.to_vec())?;
    Some(RankedHand::HighCard { cards })
}

/// Five strictly consecutive values, highest run first, then the wheel.
///
/// Duplicate values keep their first card in pool order. Returns the cards from
/// high to low (the wheel as `A 2 3 4 5`) and the card that tops the straight.
pub(crate) fn straight_run(pool: &[Card]) -> Option<([Card; 5], Card)> {
    let mut distinct: Vec<Card> = Vec::with_capacity(pool.len());
    for &card in pool {
        if !distinct.iter().any(|c| c.value() == card.value()) {
            distinct.push(card);
        }
    }
    distinct.sort_by_key(|c| Reverse(c.value()));

    if let Some(run) = distinct
        .windows(5)
        .find(|w| w.windows(2).all(|p| p[0].value() == p[1].value() + 1))
    {
        let cards: [Card; 5] = run.try_into().ok()?;
        return Some((cards, cards[0]));
    }

    let find = |rank: Rank| distinct.iter().copied().find(|c| c.rank == rank);
    let wheel = [
        find(Rank::Ace)?,
        find(Rank::Two)?,
        find(Rank::Three)?,
        find(Rank::Four)?,
        find(Rank::Five)?,
    ];
    Some((wheel, wheel[4]))
}

/// First suit, in [`Suit::ALL`] order, held at least five times, with its cards.
fn flush_suit(pool: &[Card]) -> Option<(Suit, Vec<Card>)> {
    Suit::ALL.into_iter().find_map(|suit| {
        let suited: Vec<Card> = pool.iter().copied().filter(|c| c.suit == suit).collect();
        (suited.len() >= 5).then_some((suit, suited))
    })
}

/// Cards bucketed by value, highest value first, each bucket in pool order.
fn value_groups(pool: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &card in pool {
        match groups.iter_mut().find(|g| g[0].value() == card.value()) {
            Some(group) => group.push(card),
            None => groups.push(vec![card]),
        }
    }
    groups.sort_by_key(|g| Reverse(g[0].value()));
    groups
}

/// Highest-valued group of exactly `N` cards.
fn first_group<const N: usize>(pool: &[Card]) -> Option<[Card; N]> {
    value_groups(pool)
        .into_iter()
        .find(|g| g.len() == N)
        .and_then(|g| g.try_into().ok())
}

/// The `N` best cards left once `used` is taken out of the pool.
fn kickers<const N: usize>(pool: &[Card], used: &[Card]) -> Option<[Card; N]> {
    let rest = by_value_desc(pool.iter().copied().filter(|c| !used.contains(c)).collect());
    rest.get(..N)?.try_into().ok()
}

fn top_five(cards: Vec<Card>) -> Option<[Card; 5]> {
    by_value_desc(cards).get(..5)?.try_into().ok()
}

// stable: equal values keep pool order
fn by_value_desc(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|c| Reverse(c.value()));
    cards
}
