use dugout_core::PivotRow;
use yew::prelude::*;

use crate::components::card::Card;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub positions: Vec<String>,
    /// Already sorted by descending total; includes departed players who
    /// still hold innings in the filtered games.
    pub rows: Vec<PivotRow>,
}

#[function_component(PivotTable)]
pub fn pivot_table(p: &Props) -> Html {
    html! {
        <Card
            title="Pivot: Player by Position (filtered)"
            subtitle="Review distribution balance by position."
        >
            <div class="table-scroll">
                <table class="pivot-table">
                    <thead>
                        <tr>
                            <th>{ "Player" }</th>
                            { for p.positions.iter().map(|label| html! {
                                <th key={label.clone()}>{ label }</th>
                            }) }
                            <th>{ "Total" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for p.rows.iter().map(|row| html! {
                            <tr key={row.player.clone()}>
                                <td class="pivot-table__player">{ &row.player }</td>
                                { for row.by_position.iter().enumerate().map(|(index, count)| html! {
                                    <td key={index.to_string()}>{ *count }</td>
                                }) }
                                <td class="pivot-table__total">{ row.total }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </Card>
    }
}
