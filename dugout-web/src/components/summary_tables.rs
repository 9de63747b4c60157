use dugout_core::NameCount;
use yew::prelude::*;

use crate::components::card::Card;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerTotalsProps {
    /// Roster-ordered counts; rendering re-sorts by descending innings.
    pub rows: Vec<NameCount>,
}

#[function_component(PlayerTotals)]
pub fn player_totals(p: &PlayerTotalsProps) -> Html {
    let mut rows = p.rows.clone();
    rows.sort_by(|a, b| b.innings.cmp(&a.innings));
    let max = rows.first().map_or(0, |row| row.innings).max(1);
    html! {
        <Card
            title="Total Innings by Player (filtered)"
            subtitle="Sum of all assigned defensive innings."
        >
            <table class="summary-table">
                <thead>
                    <tr>
                        <th>{ "Player" }</th>
                        <th>{ "Innings" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| {
                        let width = format!("width: {}%", row.innings * 100 / max);
                        html! {
                            <tr key={row.name.clone()}>
                                <td>{ &row.name }</td>
                                <td class="summary-table__count">
                                    <span class="meter" style={width} aria-hidden="true"></span>
                                    <span class="summary-table__number">{ row.innings }</span>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </Card>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PositionTotalsProps {
    pub counts: Vec<NameCount>,
}

/// One header per position, a single row of totals beneath.
#[function_component(PositionTotals)]
pub fn position_totals(p: &PositionTotalsProps) -> Html {
    html! {
        <Card
            title="Total Innings by Position (filtered)"
            subtitle="How much each spot was used."
        >
            <table class="summary-table">
                <thead>
                    <tr>
                        { for p.counts.iter().map(|count| html! {
                            <th key={count.name.clone()}>{ &count.name }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        { for p.counts.iter().map(|count| html! {
                            <td key={count.name.clone()}>{ count.innings }</td>
                        }) }
                    </tr>
                </tbody>
            </table>
        </Card>
    }
}
