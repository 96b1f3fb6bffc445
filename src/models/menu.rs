use serde::{Deserialize, Serialize};

/// Item canjeable del menú de un comercio (`/list_menu`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub required_points: i64,
}

/// Body de creación/actualización. El backend espera la clave `item`
/// para el nombre, no `name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemPayload {
    pub item: String,
    pub price: f64,
    pub required_points: i64,
}

/// Items que el cliente puede pagar con sus puntos actuales. Un cliente
/// sin puntos conocidos (lookup fallido) no puede canjear nada.
pub fn affordable_items(items: &[MenuItem], points: Option<i64>) -> Vec<MenuItem> {
    let available = points.unwrap_or(0);
    items
        .iter()
        .filter(|item| item.required_points <= available)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, required_points: i64) -> MenuItem {
        MenuItem {
            id,
            name: format!("item-{}", id),
            price: 4.5,
            required_points,
        }
    }

    #[test]
    fn filters_items_above_current_points() {
        let items = vec![item(1, 2), item(2, 5), item(3, 10)];
        let affordable = affordable_items(&items, Some(5));
        assert_eq!(
            affordable.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn unknown_points_afford_nothing_with_cost() {
        let items = vec![item(1, 1), item(2, 0)];
        let affordable = affordable_items(&items, None);
        // Solo los items gratuitos pasan el filtro con 0 puntos
        assert_eq!(affordable.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    }
}
