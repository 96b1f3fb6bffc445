use serde::{Deserialize, Serialize};

/// Cliente final de un comercio. `/customers` devuelve solo `id` + `email`;
/// los puntos se completan después con `/customer_point/:id`. `points = None`
/// significa que el lookup falló y se muestra el placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub points: Option<i64>,
}

impl Customer {
    /// Total de puntos para mostrar. El servidor es la autoridad; si el
    /// lookup falló, se enseña "N/A" en lugar de inventar un valor.
    pub fn points_label(&self) -> String {
        match self.points {
            Some(points) => points.to_string(),
            None => "N/A".to_string(),
        }
    }
}

/// Reemplaza los puntos de un cliente con el total devuelto por el servidor.
/// El cliente nunca calcula un total nuevo por su cuenta.
pub fn with_server_points(customers: &[Customer], customer_id: i64, points: i64) -> Vec<Customer> {
    customers
        .iter()
        .map(|c| {
            if c.id == customer_id {
                Customer {
                    points: Some(points),
                    ..c.clone()
                }
            } else {
                c.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: i64, points: Option<i64>) -> Customer {
        Customer {
            id,
            email: format!("c{}@mail.com", id),
            points,
        }
    }

    #[test]
    fn points_label_uses_placeholder_when_lookup_failed() {
        assert_eq!(customer(1, Some(12)).points_label(), "12");
        assert_eq!(customer(2, None).points_label(), "N/A");
    }

    #[test]
    fn redeem_applies_server_returned_total_only_to_that_customer() {
        let customers = vec![customer(1, Some(10)), customer(2, Some(7))];

        // Tras canjear un item de 4 puntos, el servidor devuelve el total nuevo
        let updated = with_server_points(&customers, 1, 6);

        assert_eq!(updated[0].points, Some(6));
        assert_eq!(updated[1].points, Some(7));
    }

    #[test]
    fn server_total_overwrites_missing_points() {
        let customers = vec![customer(1, None)];
        let updated = with_server_points(&customers, 1, 3);
        assert_eq!(updated[0].points, Some(3));
    }
}
