//! Built-in sample snippet used by `companion analyze --sample`.

use crate::languages::Language;

pub const SAMPLE_LANGUAGE: Language = Language::TypeScript;

pub const DEFAULT_SAMPLE: &str = r#"import { z } from "zod";
import type { Request, Response } from "express";

const OrderSchema = z.object({
  id: z.string(),
  items: z.array(z.object({ sku: z.string(), qty: z.number() })),
});

type Order = z.infer<typeof OrderSchema>;

export async function loadOrder(id: string): Promise<Order> {
  const res = await fetch(`/api/orders/${id}`);
  if (!res.ok) {
    throw new Error(`order ${id} not found`);
  }
  return OrderSchema.parse(await res.json());
}

export function totalQuantity(order: Order): number {
  let total = 0;
  for (const item of order.items) {
    if (item.qty > 0 && item.sku) {
      total += item.qty;
    }
  }
  return total;
}

export const handleOrder = async (req: Request, res: Response) => {
  const order = await loadOrder(req.params.id);
  res.json({ order, total: totalQuantity(order) });
};
"#;
