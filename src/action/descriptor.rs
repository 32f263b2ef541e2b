//! The static discovery document served on GET/OPTIONS.
//!
//! Assembled once at process start; identical for every request. This handler
//! path cannot fail.

use lazy_static::lazy_static;

use crate::action::wire::{
    ActionGetResponse, ActionLinks, ActionParameter, ActionParameterOption, LinkedAction,
};
use crate::tokens::{JUP_MINT, SEND_MINT, SOL_MINT};

/// Icon shown by blink clients next to the action.
const ICON_URL: &str =
    "https://res.cloudinary.com/dqutstz1q/image/upload/v1729265344/yea6zyzy4a3xevguiajs.png";

lazy_static! {
    static ref DESCRIPTOR: ActionGetResponse = ActionGetResponse {
        title: "Create a limit order".to_string(),
        icon: ICON_URL.to_string(),
        kind: "action".to_string(),
        description:
            "Create a limit order to swap USDC with a token of your choice on the Jupiter Exchange"
                .to_string(),
        label: "Create".to_string(),
        links: ActionLinks {
            actions: vec![LinkedAction {
                kind: "transaction".to_string(),
                label: "Create a limit order".to_string(),
                href: "/api/order?token={token}&amount={amount}&purchasePrice={purchasePrice}"
                    .to_string(),
                parameters: vec![
                    ActionParameter {
                        name: "token".to_string(),
                        label: "Choose token".to_string(),
                        kind: Some("select".to_string()),
                        required: true,
                        options: Some(vec![
                            ActionParameterOption {
                                label: "SOL".to_string(),
                                value: SOL_MINT.to_string(),
                                selected: true,
                            },
                            ActionParameterOption {
                                label: "JUP".to_string(),
                                value: JUP_MINT.to_string(),
                                selected: false,
                            },
                            ActionParameterOption {
                                label: "SEND".to_string(),
                                value: SEND_MINT.to_string(),
                                selected: false,
                            },
                        ]),
                    },
                    ActionParameter {
                        name: "amount".to_string(),
                        label: "Set order amount".to_string(),
                        kind: None,
                        required: true,
                        options: None,
                    },
                    ActionParameter {
                        name: "purchasePrice".to_string(),
                        label: "Set purchase price".to_string(),
                        kind: None,
                        required: true,
                        options: None,
                    },
                ],
            }],
        },
    };
}

/// The fixed discovery document.
pub fn action_descriptor() -> &'static ActionGetResponse {
    &DESCRIPTOR
}
