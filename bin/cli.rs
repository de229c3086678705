//! Deploys the engine with its debt token and mock collateral, and inspects
//! the deployed engine.

use dsc_engine::math::common::FEED_DECIMALS;
use dsc_engine::mocks::{MockCollateralInitArgs, MockV3AggregatorInitArgs};
use dsc_engine::processor::DscEngineInitArgs;
use dsc_engine::token::stable_coin::StableCoinInitArgs;
use dsc_engine::{DscEngine, MockCollateral, MockV3Aggregator, StableCoin};
use odra::host::HostEnv;
use odra::prelude::Addressable;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt, OdraCli,
};

/// Gas for each deployment (200 CSPR)
const DEPLOY_GAS: u64 = 200_000_000_000;
/// Gas for each follow-up call
const CALL_GAS: u64 = 5_000_000_000;

const WETH_USD_PRICE: i64 = 2_000_0000_0000;

/// Mock collateral and feeds, the debt token, then the engine. Debt token
/// ownership ends with the engine.
pub struct DscEngineDeployScript;

impl DeployScript for DscEngineDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        let weth = MockCollateral::load_or_deploy(
            env,
            MockCollateralInitArgs {
                symbol: String::from("WETH"),
            },
            container,
            DEPLOY_GAS,
        )?;
        let weth_feed = MockV3Aggregator::load_or_deploy(
            env,
            MockV3AggregatorInitArgs {
                decimals: FEED_DECIMALS,
                initial_answer: WETH_USD_PRICE,
            },
            container,
            DEPLOY_GAS,
        )?;
        println!("WETH at {:?}, feed at {:?}", weth.address(), weth_feed.address());

        let mut dsc = StableCoin::load_or_deploy(
            env,
            StableCoinInitArgs {
                name: String::from("Decentralized Stable Coin"),
                symbol: String::from("DSC"),
            },
            container,
            DEPLOY_GAS,
        )?;
        println!("DSC at {:?}", dsc.address());

        let engine = DscEngine::load_or_deploy(
            env,
            DscEngineInitArgs {
                token_addresses: vec![weth.address()],
                price_feed_addresses: vec![weth_feed.address()],
                dsc_address: dsc.address(),
            },
            container,
            DEPLOY_GAS,
        )?;
        println!("DscEngine at {:?}", engine.address());

        if dsc.get_owner() != Some(engine.address()) {
            env.set_gas(CALL_GAS);
            dsc.transfer_ownership(engine.address());
            println!("DSC ownership moved to the engine");
        }

        Ok(())
    }
}

/// Prints the accepted collateral, its feeds and the risk constants.
pub struct EngineInfoScenario;

impl Scenario for EngineInfoScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args,
    ) -> Result<(), Error> {
        let engine = container.contract_ref::<DscEngine>(env)?;

        println!("debt token: {:?}", engine.get_dsc());
        for token in engine.get_collateral_tokens() {
            println!(
                "collateral {:?} priced by {:?}",
                token,
                engine.get_collateral_token_price_feed(token)
            );
        }

        let params = engine.get_risk_parameters();
        println!(
            "threshold {}/{} bonus {}/{} min health factor {}",
            params.liquidation_threshold,
            params.liquidation_precision,
            params.liquidation_bonus,
            params.liquidation_precision,
            params.min_health_factor
        );

        Ok(())
    }
}

impl ScenarioMetadata for EngineInfoScenario {
    const NAME: &'static str = "engine-info";
    const DESCRIPTION: &'static str = "Prints the collateral registry and risk parameters of the engine";
}

pub fn main() {
    OdraCli::new()
        .about("CLI tool for the DSC engine")
        .deploy(DscEngineDeployScript)
        .contract::<MockCollateral>()
        .contract::<MockV3Aggregator>()
        .contract::<StableCoin>()
        .contract::<DscEngine>()
        .scenario(EngineInfoScenario)
        .build()
        .run();
}
