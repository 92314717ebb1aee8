//! Shipment endpoints

use halyard::prelude::*;

use crate::models::Shipment;
use crate::state::AppState;

/// `GET /shipments/{shipmentId}`
#[instrument(skip(state))]
pub async fn get_shipment(
    State(state): State<AppState>,
    Path(shipment_id): Path<u32>,
) -> Result<ResourceResponse<Shipment>> {
    let shipment = state
        .shipments
        .find_by_id(shipment_id)
        .await
        .ok_or_else(|| Error::NotFound(format!("shipment {shipment_id}")))?;

    let id = shipment_id.to_string();
    Ok(ResourceResponse::wrap(shipment)
        .with_self_link(state.link_for("shipment", &[("shipmentId", &id)])?))
}

/// `GET /orders/{orderId}/shipment` — the order's most recent shipment
#[instrument(skip(state))]
pub async fn get_order_shipment(
    State(state): State<AppState>,
    Path(order_id): Path<u32>,
) -> Result<ResourceResponse<Shipment>> {
    let shipment = state
        .shipments
        .find_last_by_order_id(order_id)
        .await
        .ok_or_else(|| Error::NotFound(format!("no shipment for order {order_id}")))?;

    let shipment_id = shipment.id.to_string();
    let order_id_str = order_id.to_string();
    Ok(ResourceResponse::wrap(shipment)
        .with_self_link(state.link_for("shipment", &[("shipmentId", &shipment_id)])?)
        .with_link(
            "order",
            state.link_for("order", &[("orderId", &order_id_str)])?,
        ))
}
